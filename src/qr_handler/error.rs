//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载二维码生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! `code()` / `stage()` 输出稳定字符串，供 CLI 以 JSON 形式输出或日志聚合。

/// 二维码生成统一错误类型。
///
/// 该类型会在 CLI 层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// 输入为空（对应页面上的 “Please enter a URL”）。
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("Please enter a valid HTTP/HTTPS URL: {0}")]
    InvalidUrl(String),

    #[error("编码错误：{0}")]
    Encode(String),

    /// 像素缓冲长度与声明尺寸不一致。
    #[error("像素缓冲长度不匹配：期望 {expected} 字节，实际 {actual} 字节")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("输出错误：{0}")]
    Output(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl QrError {
    /// 稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Encode(_) => "encode_failed",
            Self::SizeMismatch { .. } => "size_mismatch",
            Self::InvalidFormat(_) => "invalid_format",
            Self::Output(_) => "output_failed",
            Self::ResourceLimit(_) => "resource_limit",
        }
    }

    /// 出错所在的处理阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::EmptyInput | Self::InvalidUrl(_) => "validate",
            Self::Encode(_) => "encode",
            Self::SizeMismatch { .. } => "raster",
            Self::InvalidFormat(_) => "config",
            Self::Output(_) => "output",
            Self::ResourceLimit(_) => "runtime",
        }
    }
}

impl From<QrError> for String {
    fn from(error: QrError) -> Self {
        error.to_string()
    }
}
