//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入类型”和“流水线中间结果”解耦：
//! - `GenerateRequest` 表示一次用户生成请求
//! - `ModuleMatrix` 表示编码器输出的模块矩阵
//! - `PixelBuffer` 表示栅格化后的 RGBA 像素
//! - `QrImage` 表示可直接下载或内嵌的最终结果

use serde::Serialize;

use super::{OutputFormat, QrError, SizePreset};

/// 一次生成请求。
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// 用户输入的 URL（原样，未规范化）。
    pub url: String,
    /// 尺寸档位，`None` 时使用当前配置。
    pub size: Option<SizePreset>,
    /// 输出格式，`None` 时使用当前配置。
    pub format: Option<OutputFormat>,
}

impl GenerateRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: None,
            format: None,
        }
    }

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// 编码阶段输出：`width × width` 的模块矩阵，`true` 为深色模块。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// 按行优先顺序构建矩阵，长度必须为 `width²`。
    pub fn new(width: usize, modules: Vec<bool>) -> Result<Self, QrError> {
        let expected = width
            .checked_mul(width)
            .ok_or_else(|| QrError::ResourceLimit("模块矩阵尺寸溢出".to_string()))?;
        if modules.len() != expected {
            return Err(QrError::SizeMismatch {
                expected,
                actual: modules.len(),
            });
        }
        Ok(Self { width, modules })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 读取 `(x, y)` 处模块，越界返回 `false`。
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        self.modules[y * self.width + x]
    }
}

/// 栅格化阶段输出：`size × size` 个 RGBA 采样，行优先存储。
///
/// 只能通过校验长度的构造函数创建，保证 `data.len() == size² × 4`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(size: u32, data: Vec<u8>) -> Result<Self, QrError> {
        let expected = Self::byte_len(size)?;
        if data.len() != expected {
            return Err(QrError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// 构建纯色画布。
    pub fn filled(size: u32, rgba: [u8; 4]) -> Result<Self, QrError> {
        let pixels = Self::byte_len(size)? / 4;
        let data = rgba.repeat(pixels);
        Ok(Self { size, data })
    }

    fn byte_len(size: u32) -> Result<usize, QrError> {
        (size as usize)
            .checked_mul(size as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| QrError::ResourceLimit("像素缓冲尺寸溢出".to_string()))
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// 读取 `(x, y)` 处像素，越界返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = (y as usize * self.size as usize + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.size || y >= self.size {
            return;
        }
        let idx = (y as usize * self.size as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }
}

impl TryFrom<image::RgbaImage> for PixelBuffer {
    type Error = QrError;

    /// 仅接受正方形图像。
    fn try_from(image: image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        if width != height {
            return Err(QrError::InvalidFormat(format!(
                "画布必须为正方形：{}x{}",
                width, height
            )));
        }
        Self::new(width, image.into_raw())
    }
}

/// 最终输出：可下载的文件字节与可内嵌的 Data URI。
#[derive(Debug, Clone)]
pub struct QrImage {
    pub format: OutputFormat,
    /// 像素边长。
    pub size: u32,
    /// 文件内容（PNG 字节或 SVG 文本的 UTF-8 字节）。
    pub bytes: Vec<u8>,
    pub data_uri: String,
    /// 建议下载文件名，形如 `qrcode-1700000000000.png`。
    pub file_name: String,
}

/// 原生分享面板所需的内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_url(url: &str) -> Self {
        Self {
            title: "QR Code".to_string(),
            text: format!("QR Code for {}", url),
            url: url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffer_rejects_length_mismatch() {
        let result = PixelBuffer::new(4, vec![0; 60]);

        assert!(matches!(
            result,
            Err(QrError::SizeMismatch { expected: 64, actual: 60 })
        ));
    }

    #[test]
    fn pixel_buffer_reads_row_major() {
        let mut buffer = PixelBuffer::filled(3, [255, 255, 255, 255]).unwrap();
        buffer.set_pixel(2, 1, [1, 2, 3, 4]);

        assert_eq!(buffer.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(&buffer.as_bytes()[(3 + 2) * 4..(3 + 2) * 4 + 4], &[1, 2, 3, 4]);
        assert_eq!(buffer.pixel(3, 0), None);
    }

    #[test]
    fn zero_sized_buffer_is_empty() {
        let buffer = PixelBuffer::new(0, Vec::new()).unwrap();

        assert_eq!(buffer.size(), 0);
        assert!(buffer.as_bytes().is_empty());
    }

    #[test]
    fn rgba_image_must_be_square() {
        let image = image::RgbaImage::new(4, 2);

        assert!(matches!(
            PixelBuffer::try_from(image),
            Err(QrError::InvalidFormat(_))
        ));
        assert!(PixelBuffer::try_from(image::RgbaImage::new(3, 3)).is_ok());
    }

    #[test]
    fn module_matrix_checks_length() {
        assert!(ModuleMatrix::new(2, vec![true; 3]).is_err());

        let matrix = ModuleMatrix::new(2, vec![true, false, false, true]).unwrap();
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 0));
        assert!(matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(2, 0));
    }

    #[test]
    fn share_payload_mentions_url() {
        let payload = SharePayload::for_url("https://example.com");

        assert_eq!(payload.title, "QR Code");
        assert_eq!(payload.text, "QR Code for https://example.com");
    }
}
