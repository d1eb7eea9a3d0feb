//! # 输入校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段校验用户输入，尽快失败，避免无意义的编码与栅格化开销。
//!
//! ## 实现思路
//!
//! - 去除首尾空白后为空：`EmptyInput`
//! - 解析失败或协议不是 http/https：`InvalidUrl`
//! - 超出当前纠错等级下的二维码字节容量：`ResourceLimit`
//!
//! 校验通过后返回裁剪后的原始输入，编码器拿到的是用户输入的文本，而不是规范化后的 URL。

use super::{QrConfig, QrError};

/// 校验 URL 并返回待编码文本。
///
/// # 示例
/// ```rust
/// use qr_generator::qr_handler::{validate_url, QrConfig};
///
/// let text = validate_url("  https://example.com/a?b=c ", &QrConfig::default())?;
/// assert_eq!(text, "https://example.com/a?b=c");
/// # Ok::<(), qr_generator::qr_handler::QrError>(())
/// ```
pub fn validate_url<'a>(input: &'a str, config: &QrConfig) -> Result<&'a str, QrError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QrError::EmptyInput);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| QrError::InvalidUrl(e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(QrError::InvalidUrl(format!(
            "不支持的协议：{}",
            parsed.scheme()
        )));
    }

    let max_bytes = config.ec_level.max_bytes();
    if trimmed.len() > max_bytes {
        return Err(QrError::ResourceLimit(format!(
            "URL 过长：{} 字节（纠错等级 {:?} 限制：{} 字节）",
            trimmed.len(),
            config.ec_level,
            max_bytes
        )));
    }

    log::debug!("URL 校验通过 - host: {}", parsed.host_str().unwrap_or(""));

    Ok(trimmed)
}
