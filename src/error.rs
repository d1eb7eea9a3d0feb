//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，CLI 与各辅助模块（设置、存储、剪贴板）
//! 都返回 `Result<T, AppError>`，避免 `.map_err(|e| e.to_string())` 式的零散处理。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `QrError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，便于以 JSON 输出。

use serde::Serialize;

use crate::qr_handler::QrError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板读写操作失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 二维码生成流水线错误（校验 / 编码 / 输出）
    #[error("{0}")]
    Qr(#[from] QrError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 输出目录不可用
    #[error("存储目录不可用: {0}")]
    Storage(String),

    /// 设置文件读写失败
    #[error("设置错误: {0}")]
    Settings(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_error_message_passes_through() {
        let err: AppError = QrError::EmptyInput.into();

        assert_eq!(err.to_string(), "Please enter a URL");
        assert_eq!(serde_json::to_string(&err).unwrap(), "\"Please enter a URL\"");
    }
}
