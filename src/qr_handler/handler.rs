//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `QrGenerator` 只负责流程编排与配置管理，不直接与 CLI 或剪贴板绑定。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 校验 URL
//! 3. 调用注入的编码器得到模块矩阵
//! 4. 栅格化为 RGBA 像素
//! 5. 输出 PNG 或 SVG，并生成 Data URI 与下载文件名
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<QrConfig>>` 支持运行时切换档位。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `encode/raster/output/total` 阶段耗时，便于性能诊断。

use std::io::Cursor;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use image::{ImageFormat, RgbaImage};

use super::data_uri::{download_file_name, png_data_uri, svg_data_uri};
use super::encoder::{QrCodeEncoder, QrEncoder, rasterize};
use super::source::{GenerateRequest, PixelBuffer, QrImage, SharePayload};
use super::validate::validate_url;
use super::vectorize::vectorize;
use super::{OutputFormat, PathStrategy, QrConfig, QrError, SizePreset};

/// 二维码生成器。
///
/// 封装了配置状态与编码器，并编排各子模块实现完整流程。
pub struct QrGenerator {
    config: Arc<RwLock<QrConfig>>,
    encoder: Box<dyn QrEncoder>,
}

impl QrGenerator {
    /// 使用默认编码器（`qrcode` crate，纠错等级取自配置）创建生成器。
    ///
    /// # 示例
    /// ```rust
    /// use qr_generator::qr_handler::{GenerateRequest, OutputFormat, QrConfig, QrGenerator};
    ///
    /// let generator = QrGenerator::new(QrConfig::default());
    /// let image = generator.generate(
    ///     &GenerateRequest::new("https://example.com").with_format(OutputFormat::Svg),
    /// )?;
    /// assert!(image.data_uri.starts_with("data:image/svg+xml"));
    /// # Ok::<(), qr_generator::qr_handler::QrError>(())
    /// ```
    pub fn new(config: QrConfig) -> Self {
        let encoder = QrCodeEncoder::new(config.ec_level);
        Self::with_encoder(config, Box::new(encoder))
    }

    /// 使用调用方提供的编码器创建生成器。
    pub fn with_encoder(config: QrConfig, encoder: Box<dyn QrEncoder>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            encoder,
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次请求链路使用一致参数。
    pub fn config_snapshot(&self) -> Result<QrConfig, QrError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| QrError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    fn update_config<F>(&self, update: F) -> Result<(), QrError>
    where
        F: FnOnce(&mut QrConfig),
    {
        let mut config = self
            .config
            .write()
            .map_err(|_| QrError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        update(&mut config);
        Ok(())
    }

    /// 切换默认尺寸档位。
    pub fn set_size_preset(&self, preset: SizePreset) -> Result<(), QrError> {
        self.update_config(|config| config.size_preset = preset)?;
        log::info!("⚙️ 已切换尺寸档位：{}（{}px）", preset.as_str(), preset.pixels());
        Ok(())
    }

    pub fn set_format(&self, format: OutputFormat) -> Result<(), QrError> {
        self.update_config(|config| config.format = format)?;
        log::info!("⚙️ 已切换输出格式：{}", format.extension());
        Ok(())
    }

    pub fn set_path_strategy(&self, strategy: PathStrategy) -> Result<(), QrError> {
        self.update_config(|config| config.path_strategy = strategy)?;
        log::info!("⚙️ 已切换路径策略：{}", strategy.as_str());
        Ok(())
    }

    /// 处理主入口：校验、编码、栅格化并输出。
    pub fn generate(&self, request: &GenerateRequest) -> Result<QrImage, QrError> {
        let config = self.config_snapshot()?;
        let size = request.size.unwrap_or(config.size_preset).pixels();
        let format = request.format.unwrap_or(config.format);
        let total_start = Instant::now();

        let text = validate_url(&request.url, &config)?;

        let encode_start = Instant::now();
        let matrix = self.encoder.encode(text)?;
        let encode_elapsed = encode_start.elapsed();

        let raster_start = Instant::now();
        let pixels = rasterize(&matrix, size)?;
        let raster_elapsed = raster_start.elapsed();

        let output_start = Instant::now();
        let (bytes, data_uri) = match format {
            OutputFormat::Png => {
                let png = Self::encode_png(pixels)?;
                let uri = png_data_uri(&png);
                (png, uri)
            }
            OutputFormat::Svg => {
                let svg = vectorize(&pixels, config.path_strategy);
                let uri = svg_data_uri(&svg);
                (svg.into_bytes(), uri)
            }
        };
        let output_elapsed = output_start.elapsed();

        log::info!(
            "✅ 二维码生成完成 - format={} size={} modules={} encode={}ms raster={}ms output={}ms total={}ms",
            format.extension(),
            size,
            matrix.width(),
            encode_elapsed.as_millis(),
            raster_elapsed.as_millis(),
            output_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(QrImage {
            format,
            size,
            bytes,
            data_uri,
            file_name: download_file_name(format, chrono::Utc::now()),
        })
    }

    /// 构建分享内容，URL 需先通过校验。
    pub fn share_payload(&self, url: &str) -> Result<SharePayload, QrError> {
        let config = self.config_snapshot()?;
        let text = validate_url(url, &config)?;
        Ok(SharePayload::for_url(text))
    }

    fn encode_png(pixels: PixelBuffer) -> Result<Vec<u8>, QrError> {
        let size = pixels.size();
        let image = RgbaImage::from_raw(size, size, pixels.into_bytes())
            .ok_or_else(|| QrError::Output("PNG 输出缓冲长度异常".to_string()))?;

        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| QrError::Output(format!("PNG 编码失败：{}", e)))?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr_handler::source::ModuleMatrix;
    use std::sync::Mutex;

    /// 记录收到的文本，并返回固定的 2x2 棋盘矩阵。
    struct RecordingEncoder {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl QrEncoder for RecordingEncoder {
        fn encode(&self, data: &str) -> Result<ModuleMatrix, QrError> {
            self.calls.lock().unwrap().push(data.to_string());
            ModuleMatrix::new(2, vec![true, false, false, true])
        }
    }

    fn recording_generator() -> (QrGenerator, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let encoder = RecordingEncoder { calls: calls.clone() };
        (QrGenerator::with_encoder(QrConfig::default(), Box::new(encoder)), calls)
    }

    #[test]
    fn injected_encoder_receives_trimmed_input() {
        let (generator, calls) = recording_generator();

        generator
            .generate(&GenerateRequest::new("  https://example.com/x  "))
            .expect("generate should succeed");

        assert_eq!(*calls.lock().unwrap(), vec!["https://example.com/x".to_string()]);
    }

    #[test]
    fn invalid_url_never_reaches_encoder() {
        let (generator, calls) = recording_generator();

        let empty = generator.generate(&GenerateRequest::new(""));
        let ftp = generator.generate(&GenerateRequest::new("ftp://example.com"));

        assert!(matches!(empty, Err(QrError::EmptyInput)));
        assert!(matches!(ftp, Err(QrError::InvalidUrl(_))));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn svg_output_covers_dark_modules() {
        let (generator, _) = recording_generator();

        let image = generator
            .generate(
                &GenerateRequest::new("https://example.com")
                    .with_size(SizePreset::Small)
                    .with_format(OutputFormat::Svg),
            )
            .expect("generate should succeed");

        let svg = String::from_utf8(image.bytes).unwrap();
        // 2x2 棋盘在 128px 画布上，每个深色模块 64x64
        assert_eq!(svg.matches("h1v1h-1z").count(), 2 * 64 * 64);
        assert!(image.file_name.ends_with(".svg"));
        assert_eq!(image.size, 128);
    }

    #[test]
    fn merged_strategy_shrinks_svg() {
        let (generator, _) = recording_generator();
        let request = GenerateRequest::new("https://example.com")
            .with_size(SizePreset::Small)
            .with_format(OutputFormat::Svg);

        let unit = generator.generate(&request).unwrap();
        generator.set_path_strategy(PathStrategy::MergedRuns).unwrap();
        let merged = generator.generate(&request).unwrap();

        assert!(merged.bytes.len() < unit.bytes.len());
        let svg = String::from_utf8(merged.bytes).unwrap();
        assert_eq!(svg.matches("h64v1h-64z").count(), 2 * 64);
    }

    #[test]
    fn png_output_decodes_to_requested_size() {
        let generator = QrGenerator::new(QrConfig::default());

        let image = generator
            .generate(&GenerateRequest::new("https://example.com").with_size(SizePreset::Large))
            .expect("generate should succeed");

        assert!(image.data_uri.starts_with("data:image/png;base64,"));
        let decoded = image::load_from_memory(&image.bytes).expect("png should decode");
        assert_eq!(decoded.width(), 512);
        assert_eq!(decoded.height(), 512);
        assert!(image.file_name.starts_with("qrcode-"));
    }

    #[test]
    fn request_overrides_config_defaults() {
        let generator = QrGenerator::new(QrConfig::default());
        generator.set_size_preset(SizePreset::Large).unwrap();
        generator.set_format(OutputFormat::Svg).unwrap();

        let from_config = generator.generate(&GenerateRequest::new("https://example.com")).unwrap();
        let overridden = generator
            .generate(
                &GenerateRequest::new("https://example.com")
                    .with_size(SizePreset::Small)
                    .with_format(OutputFormat::Png),
            )
            .unwrap();

        assert_eq!(from_config.size, 512);
        assert_eq!(from_config.format, OutputFormat::Svg);
        assert_eq!(overridden.size, 128);
        assert_eq!(overridden.format, OutputFormat::Png);
    }

    #[test]
    fn share_payload_requires_valid_url() {
        let generator = QrGenerator::new(QrConfig::default());

        assert!(generator.share_payload("not a url").is_err());
        let payload = generator.share_payload("https://example.com").unwrap();
        assert_eq!(payload.url, "https://example.com");
    }
}
