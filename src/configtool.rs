//  ____  ____     __        __    __  __      _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _ \ __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | |  __/ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\___|\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::{fs, io, path::{Path, PathBuf}};
use dirs::config_dir;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::passgen::{GenOptions, MAX_LENGTH, MIN_LENGTH};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Persistent defaults for password generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let options = GenOptions::default();
        Self {
            length: options.length,
            include_digits: options.include_digits,
            include_special: options.include_special,
        }
    }
}

impl Settings {
    /// 读取配置文件，文件不存在时返回默认值
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&data)?;
        settings.validate()?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::InvalidValue(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        Ok(())
    }

    pub fn gen_options(&self) -> GenOptions {
        GenOptions {
            length: self.length,
            include_digits: self.include_digits,
            include_special: self.include_special,
        }
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawometer")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// Explicit path wins; otherwise the file in the user config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(get_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}
