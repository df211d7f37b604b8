//! Application directory helpers anchored to a single `.droptray` folder.
//!
//! The helpers centralize where config and log files live across platforms,
//! defaulting to the OS config directory (e.g., `%APPDATA%` on Windows) and
//! allowing a `DROPTRAY_CONFIG_HOME` override for tests or portable setups.

use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".droptray";

static CONFIG_BASE_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);
static OVERRIDE_HOLDERS: Mutex<()> = Mutex::new(());

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the root `.droptray` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    let path = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Return the logs directory inside the `.droptray` root, creating it if
/// needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let path = app_root_dir()?.join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(path) = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
    {
        return Some(path);
    }
    if let Ok(path) = std::env::var("DROPTRAY_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Scoped override of the config base directory.
///
/// Tests hold one of these to keep filesystem effects inside a tempdir.
/// Holders are serialized, so two overrides can never interleave within a
/// process.
pub struct ConfigBaseGuard {
    _exclusive: MutexGuard<'static, ()>,
}

impl ConfigBaseGuard {
    /// Point the config base at `path` until the guard drops.
    pub fn set(path: PathBuf) -> Self {
        let exclusive = OVERRIDE_HOLDERS.lock().unwrap_or_else(|err| err.into_inner());
        set_override(Some(path));
        Self {
            _exclusive: exclusive,
        }
    }
}

impl Drop for ConfigBaseGuard {
    fn drop(&mut self) {
        set_override(None);
    }
}

fn set_override(value: Option<PathBuf>) {
    let mut slot = CONFIG_BASE_OVERRIDE
        .lock()
        .unwrap_or_else(|err| err.into_inner());
    *slot = value;
}
