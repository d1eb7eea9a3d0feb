//! 用户默认设置（尺寸 / 格式 / 路径策略 / 输出目录）的持久化。
//!
//! 设置文件缺失时使用默认值；文件损坏时记录警告并回退默认值，不阻断生成。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::qr_handler::{OutputFormat, PathStrategy, QrConfig, SizePreset};

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub default_size: SizePreset,
    #[serde(default)]
    pub default_format: OutputFormat,
    #[serde(default)]
    pub path_strategy: PathStrategy,
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl AppSettings {
    /// 将设置应用到生成配置上。
    pub fn to_config(&self) -> QrConfig {
        QrConfig {
            size_preset: self.default_size,
            format: self.default_format,
            path_strategy: self.path_strategy,
            ..QrConfig::default()
        }
    }
}

pub fn settings_file_path(config_dir: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(config_dir)
        .map_err(|e| AppError::Settings(format!("创建配置目录失败: {}", e)))?;

    Ok(config_dir.join(SETTINGS_FILE_NAME))
}

pub fn load_settings_from_path(settings_path: &Path) -> AppSettings {
    if !settings_path.exists() {
        return AppSettings::default();
    }

    let content = match fs::read_to_string(settings_path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("读取设置文件失败，使用默认设置: {err}");
            return AppSettings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("解析设置文件失败，使用默认设置: {err}");
            AppSettings::default()
        }
    }
}

pub fn save_settings_to_path(settings_path: &Path, settings: &AppSettings) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Settings(format!("序列化设置失败: {}", e)))?;

    fs::write(settings_path, content)?;
    Ok(())
}
