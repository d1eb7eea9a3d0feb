//! # URL 二维码生成工具 — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与结果输出。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use qr_generator::error::AppError;
use qr_generator::qr_handler::{
    GenerateRequest, OutputFormat, PathStrategy, QrError, QrGenerator, SizePreset,
};
use qr_generator::{clipboard, settings, storage};

#[derive(Parser, Debug)]
#[command(name = "qr-generator", version, about = "Generate a QR code image for a URL")]
struct Cli {
    /// URL to encode (http or https)
    url: String,

    /// Size preset: small, medium, large, xlarge, or the pixel count
    #[arg(short, long, value_parser = parse_size)]
    size: Option<SizePreset>,

    /// Output format: png or svg
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// SVG path strategy: unit or merged
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<PathStrategy>,

    /// Directory the image file is written to
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the data URI instead of writing a file
    #[arg(long)]
    print_uri: bool,

    /// Copy the URL to the system clipboard
    #[arg(long)]
    copy_url: bool,

    /// Print the share payload as JSON
    #[arg(long)]
    share: bool,

    /// Directory holding settings.json
    #[arg(long, default_value = ".qr-generator")]
    config: PathBuf,

    /// Persist the given size/format/strategy/out as defaults
    #[arg(long)]
    save_defaults: bool,
}

fn parse_size(value: &str) -> Result<SizePreset, String> {
    SizePreset::from_str(value).map_err(String::from)
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(value).map_err(String::from)
}

fn parse_strategy(value: &str) -> Result<PathStrategy, String> {
    PathStrategy::from_str(value).map_err(String::from)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings_path = settings::settings_file_path(&cli.config)?;
    let mut app_settings = settings::load_settings_from_path(&settings_path);

    if cli.save_defaults {
        if let Some(size) = cli.size {
            app_settings.default_size = size;
        }
        if let Some(format) = cli.format {
            app_settings.default_format = format;
        }
        if let Some(strategy) = cli.strategy {
            app_settings.path_strategy = strategy;
        }
        if let Some(out) = &cli.out {
            app_settings.output_dir = Some(out.to_string_lossy().to_string());
        }
        settings::save_settings_to_path(&settings_path, &app_settings)?;
        log::info!("已保存默认设置: {}", settings_path.display());
    }

    let generator = QrGenerator::new(app_settings.to_config());
    if let Some(strategy) = cli.strategy {
        generator.set_path_strategy(strategy)?;
    }

    let mut request = GenerateRequest::new(cli.url.clone());
    request.size = cli.size;
    request.format = cli.format;

    let image = generator.generate(&request)?;

    if cli.print_uri {
        println!("{}", image.data_uri);
    } else {
        let dir = storage::resolve_output_dir(cli.out.as_deref(), app_settings.output_dir.as_deref())?;
        let path = storage::save_image(&dir, &image)?;
        println!("{}", path.display());
    }

    if cli.copy_url {
        clipboard::copy_text(cli.url.trim())?;
    }

    if cli.share {
        let payload = generator.share_payload(&cli.url)?;
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| QrError::Output(format!("序列化分享内容失败: {}", e)))?;
        println!("{json}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("生成失败: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
