//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `QrConfig`，保证运行时行为可观测、可调整、可测试。
//! 尺寸档位（small / medium / large / xlarge）作为高层语义，映射到具体像素边长。
//!
//! ## 实现思路
//!
//! - `Default` 与页面默认值保持一致：256px、PNG、逐像素路径、纠错等级 H。
//! - `SizePreset` / `OutputFormat` / `PathStrategy` 负责字符串解析与反向输出。
//! - 枚举同时派生 `serde`，可直接写入设置文件。

use serde::{Deserialize, Serialize};

use super::QrError;

/// 前景判定阈值：RGB 三通道都严格小于该值时视为深色像素。
pub const DARK_CHANNEL_THRESHOLD: u8 = 128;

/// 二维码生成配置。
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// 输出边长档位。
    pub size_preset: SizePreset,
    /// 输出格式。
    pub format: OutputFormat,
    /// SVG 路径生成策略。
    pub path_strategy: PathStrategy,
    /// 纠错等级，同时决定 URL 的最大字节数。
    pub ec_level: ErrorCorrection,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size_preset: SizePreset::Medium,
            format: OutputFormat::Png,
            path_strategy: PathStrategy::UnitSquares,
            ec_level: ErrorCorrection::High,
        }
    }
}

/// 尺寸档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
    #[serde(rename = "xlarge")]
    ExtraLarge,
}

impl SizePreset {
    /// 从外部字符串解析档位，同时接受档位名与像素数。
    ///
    /// # 示例
    /// ```rust
    /// use qr_generator::qr_handler::SizePreset;
    ///
    /// assert_eq!(SizePreset::from_str("large")?, SizePreset::Large);
    /// assert_eq!(SizePreset::from_str("128")?, SizePreset::Small);
    /// # Ok::<(), qr_generator::qr_handler::QrError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Result<Self, QrError> {
        match value.trim().to_lowercase().as_str() {
            "small" | "128" => Ok(Self::Small),
            "medium" | "256" => Ok(Self::Medium),
            "large" | "512" => Ok(Self::Large),
            "xlarge" | "1024" => Ok(Self::ExtraLarge),
            other => Err(QrError::InvalidFormat(format!(
                "未知尺寸档位：{}（可选：small / medium / large / xlarge）",
                other
            ))),
        }
    }

    /// 稳定字符串，供设置文件与日志使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "xlarge",
        }
    }

    /// 对应的像素边长。
    pub fn pixels(self) -> u32 {
        match self {
            Self::Small => 128,
            Self::Medium => 256,
            Self::Large => 512,
            Self::ExtraLarge => 1024,
        }
    }
}

/// 输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Result<Self, QrError> {
        match value.trim().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(QrError::InvalidFormat(format!(
                "未知输出格式：{}（可选：png / svg）",
                other
            ))),
        }
    }

    /// 下载文件扩展名。
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// SVG 路径生成策略。
///
/// - `UnitSquares`：每个深色像素一个单位方块
/// - `MergedRuns`：同一行连续深色像素合并为一个矩形，覆盖的单元格集合不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    #[default]
    UnitSquares,
    MergedRuns,
}

impl PathStrategy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Result<Self, QrError> {
        match value.trim().to_lowercase().as_str() {
            "unit" | "unit_squares" => Ok(Self::UnitSquares),
            "merged" | "merged_runs" => Ok(Self::MergedRuns),
            other => Err(QrError::InvalidFormat(format!(
                "未知路径策略：{}（可选：unit / merged）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnitSquares => "unit_squares",
            Self::MergedRuns => "merged_runs",
        }
    }
}

/// 纠错等级，与 `qrcode::EcLevel` 一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl ErrorCorrection {
    pub(crate) fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::Low => qrcode::EcLevel::L,
            Self::Medium => qrcode::EcLevel::M,
            Self::Quartile => qrcode::EcLevel::Q,
            Self::High => qrcode::EcLevel::H,
        }
    }

    /// 版本 40 在字节模式下可容纳的最大字节数。
    pub fn max_bytes(self) -> usize {
        match self {
            Self::Low => 2953,
            Self::Medium => 2331,
            Self::Quartile => 1663,
            Self::High => 1273,
        }
    }
}

impl QrConfig {
    /// 当前档位对应的像素边长。
    pub fn size(&self) -> u32 {
        self.size_preset.pixels()
    }
}
