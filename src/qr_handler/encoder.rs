//! # 编码与栅格化模块
//!
//! ## 设计思路
//!
//! 二维码符号本身的编码（定位图形、纠错码字、掩码）交给外部库完成，
//! 这里只定义注入接口 `QrEncoder`，调用方可以替换为任意实现（测试桩、其他库）。
//!
//! ## 实现思路
//!
//! - `QrCodeEncoder`：默认实现，包装 `qrcode` crate，输出 `ModuleMatrix`。
//! - `rasterize`：把模块矩阵画到 `size × size` 的白色画布上。
//!   单个模块边长为 `floor(size / width)`，符号整体居中，余量均分到四周。

use super::source::{ModuleMatrix, PixelBuffer};
use super::{ErrorCorrection, QrError};

const LIGHT: [u8; 4] = [255, 255, 255, 255];
const DARK: [u8; 4] = [0, 0, 0, 255];

/// 二维码编码器接口。
pub trait QrEncoder: Send + Sync {
    /// 将文本编码为模块矩阵。
    fn encode(&self, data: &str) -> Result<ModuleMatrix, QrError>;
}

/// 基于 `qrcode` crate 的默认编码器。
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeEncoder {
    ec_level: ErrorCorrection,
}

impl QrCodeEncoder {
    pub fn new(ec_level: ErrorCorrection) -> Self {
        Self { ec_level }
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, data: &str) -> Result<ModuleMatrix, QrError> {
        let code = qrcode::QrCode::with_error_correction_level(data.as_bytes(), self.ec_level.to_ec_level())
            .map_err(|e| QrError::Encode(format!("二维码编码失败：{}", e)))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();

        log::debug!("二维码编码完成 - 版本: {:?} 模块宽度: {}", code.version(), width);

        ModuleMatrix::new(width, modules)
    }
}

/// 将模块矩阵栅格化为 RGBA 画布。
pub fn rasterize(matrix: &ModuleMatrix, size: u32) -> Result<PixelBuffer, QrError> {
    let width = u32::try_from(matrix.width())
        .map_err(|_| QrError::ResourceLimit("模块矩阵过大".to_string()))?;
    let module_size = if width == 0 { 0 } else { size / width };

    if module_size == 0 {
        return Err(QrError::Encode(format!(
            "画布过小：{}px 无法容纳 {} 个模块",
            size, width
        )));
    }

    let offset = (size - module_size * width) / 2;
    let mut buffer = PixelBuffer::filled(size, LIGHT)?;

    for my in 0..width {
        for mx in 0..width {
            if !matrix.is_dark(mx as usize, my as usize) {
                continue;
            }
            let left = offset + mx * module_size;
            let top = offset + my * module_size;
            for y in top..top + module_size {
                for x in left..left + module_size {
                    buffer.set_pixel(x, y, DARK);
                }
            }
        }
    }

    Ok(buffer)
}
