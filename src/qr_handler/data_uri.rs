//! # Data URI 与下载命名
//!
//! SVG 以百分号编码的文本内嵌（与浏览器 `encodeURIComponent` 相同的保留字符集），
//! PNG 以 Base64 内嵌。下载文件名使用毫秒时间戳，避免重复下载时覆盖。

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};

use super::OutputFormat;

const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// `encodeURIComponent` 不转义的字符。
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// 按 `encodeURIComponent` 规则编码 UTF-8 文本。
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("{}{}", SVG_DATA_URI_PREFIX, encode_uri_component(svg))
}

pub fn png_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, general_purpose::STANDARD.encode(png))
}

/// 生成下载文件名：`qrcode-{unix 毫秒}.{扩展名}`。
pub fn download_file_name(format: OutputFormat, now: DateTime<Utc>) -> String {
    format!("qrcode-{}.{}", now.timestamp_millis(), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("<path d=\"M0,0\"/>"), "%3Cpath%20d%3D%22M0%2C0%22%2F%3E");
        assert_eq!(encode_uri_component("#\n"), "%23%0A");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn svg_uri_has_charset_prefix() {
        let uri = svg_data_uri("<svg/>");

        assert_eq!(uri, "data:image/svg+xml;charset=utf-8,%3Csvg%2F%3E");
    }

    #[test]
    fn png_uri_is_standard_base64() {
        let uri = png_data_uri(&[137, 80, 78, 71]);

        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn file_name_uses_millis_and_extension() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        assert_eq!(download_file_name(OutputFormat::Png, now), "qrcode-1700000000123.png");
        assert_eq!(download_file_name(OutputFormat::Svg, now), "qrcode-1700000000123.svg");
    }
}
