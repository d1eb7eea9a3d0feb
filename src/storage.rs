//! 输出目录管理模块
//!
//! # 设计思路
//!
//! 统一管理生成结果的落盘路径，支持命令行指定目录与设置文件中的默认目录，
//! 并在目录不存在时自动创建。
//!
//! # 实现思路
//!
//! - 优先级：命令行目录 > 设置中的目录 > 当前工作目录。
//! - 目录不存在时自动 `create_dir_all`，避免上层判断。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::qr_handler::QrImage;

/// 获取输出目录
///
/// # 参数
/// * `explicit_dir` - 命令行指定的目录（可选）
/// * `settings_dir` - 设置文件中的默认目录（可选）
///
/// # 返回
/// - `Ok(PathBuf)` — 可用的输出目录
/// - `Err(AppError::Storage)` — 无法获取或创建目录
pub fn resolve_output_dir(
    explicit_dir: Option<&Path>,
    settings_dir: Option<&str>,
) -> Result<PathBuf, AppError> {
    let dir = match (explicit_dir, settings_dir) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::current_dir()
            .map_err(|e| AppError::Storage(format!("获取当前目录失败: {}", e)))?,
    };

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::Storage(format!("创建输出目录 '{}' 失败: {}", dir.display(), e))
        })?;
    }

    Ok(dir)
}

/// 将生成结果写入 `dir/file_name`，返回完整路径。
pub fn save_image(dir: &Path, image: &QrImage) -> Result<PathBuf, AppError> {
    let path = dir.join(&image.file_name);
    fs::write(&path, &image.bytes)?;

    log::info!(
        "💾 已保存二维码 - 路径: {} 大小: {}KB",
        path.display(),
        image.bytes.len() / 1024
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr_handler::OutputFormat;

    #[test]
    fn explicit_dir_wins_and_is_created() {
        let root = tempfile::tempdir().unwrap();
        let explicit = root.path().join("a/b");

        let dir = resolve_output_dir(Some(&explicit), Some("ignored")).unwrap();

        assert_eq!(dir, explicit);
        assert!(dir.is_dir());
    }

    #[test]
    fn settings_dir_used_when_no_explicit_dir() {
        let root = tempfile::tempdir().unwrap();
        let configured = root.path().join("from-settings");
        let configured_str = configured.to_string_lossy().to_string();

        let dir = resolve_output_dir(None, Some(&configured_str)).unwrap();

        assert_eq!(dir, configured);
        assert!(dir.is_dir());
    }

    #[test]
    fn save_image_writes_bytes_under_file_name() {
        let root = tempfile::tempdir().unwrap();
        let image = QrImage {
            format: OutputFormat::Svg,
            size: 128,
            bytes: b"<svg/>".to_vec(),
            data_uri: String::new(),
            file_name: "qrcode-1.svg".to_string(),
        };

        let path = save_image(root.path(), &image).unwrap();

        assert_eq!(path, root.path().join("qrcode-1.svg"));
        assert_eq!(fs::read(&path).unwrap(), b"<svg/>");
    }
}
