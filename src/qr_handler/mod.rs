//! # 二维码生成模块（qr_handler）
//!
//! ## 设计思路
//!
//! 该模块将“输入校验 → 编码 → 栅格化 → PNG/SVG 输出 → Data URI”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `validate`：URL 校验
//! - `encoder`：编码器接口、默认实现与栅格化
//! - `vectorize`：像素网格转 SVG 路径
//! - `data_uri`：Data URI 与下载文件名
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! CLI (main.rs)
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ validate.rs（URL 非空 + http/https）
//!    ├─ encoder.rs（QrEncoder → ModuleMatrix → PixelBuffer）
//!    ├─ vectorize.rs（PixelBuffer → SVG）或 PNG 编码
//!    └─ data_uri.rs（Data URI + 文件名）
//!    ↓
//! QrImage / QrError
//! ```

mod config;
pub mod data_uri;
pub mod encoder;
mod error;
mod handler;
mod source;
mod validate;
pub mod vectorize;

pub use config::{
    DARK_CHANNEL_THRESHOLD, ErrorCorrection, OutputFormat, PathStrategy, QrConfig, SizePreset,
};
pub use encoder::{QrCodeEncoder, QrEncoder, rasterize};
pub use error::QrError;
pub use handler::QrGenerator;
pub use source::{GenerateRequest, ModuleMatrix, PixelBuffer, QrImage, SharePayload};
pub use validate::validate_url;
pub use vectorize::{canvas_to_svg, vectorize};
