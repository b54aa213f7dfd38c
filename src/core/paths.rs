// src/core/paths.rs

//! Location of the user configuration directory and file.

use crate::constants::{CONFIG_DIR_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILENAME};
use lazy_static::lazy_static;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref DOTENVX_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Errors raised while locating the config directory.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform reports no config directory and `DOTENVX_CONFIG_DIR` is unset.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
}

/// Returns the path to the dotenvx configuration directory (`~/.config/dotenvx`).
///
/// `DOTENVX_CONFIG_DIR` takes precedence over the system location. The
/// directory is never created; a missing directory simply means no user config.
///
/// This function is memoized: the first call computes and caches the path,
/// subsequent calls return the cached value instantly.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = DOTENVX_CONFIG_DIR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let config_path = config_dir_from(env::var_os(CONFIG_DIR_ENV_VAR))?;
    log::debug!("Using config directory '{}'", config_path.display());

    *cached_path_guard = Some(config_path.clone());
    Ok(config_path)
}

/// Picks the config directory from the value of `DOTENVX_CONFIG_DIR`.
///
/// An unset or empty value falls back to `<system config dir>/dotenvx`.
pub fn config_dir_from(env_value: Option<OsString>) -> Result<PathBuf, PathError> {
    match env_value {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound),
    }
}

/// Returns the `config.toml` path inside `config_dir`.
pub fn config_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}
