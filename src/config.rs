//! Persisted application settings.
//!
//! Settings live in a single TOML file under the `.droptray` root. Missing
//! files and unknown fields both fall back to defaults, so old and new
//! builds can share a profile.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings persisted in the TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the browse dialog opens in on its next use.
    #[serde(default)]
    pub last_browse_dir: Option<PathBuf>,
    #[serde(default)]
    pub hints: HintSettings,
}

/// Startup tips preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintSettings {
    #[serde(default = "default_true")]
    pub show_on_startup: bool,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            show_on_startup: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No directory was available to hold the config file.
    #[error("No suitable directory for the config file: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    /// Failed to read an existing config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse an existing config file.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize the settings for writing.
    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the persisted settings, or defaults when no file exists yet.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
}

/// Persist the settings, replacing any previous file.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    let raw = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(&path, raw).map_err(|source| ConfigError::Write { path, source })
}

fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}
