// src/system/settings.rs

//! The optional user `config.toml` and how it combines with command-line flags.

use crate::{
    constants::DEFAULT_ENV_FILE,
    core::paths::{self, PathError},
    models::{LoadOptions, Settings},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading or applying the user config.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config directory could not be determined.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The config file exists but could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Read {
        /// The config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML or does not match the schema.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// The config file.
        path: PathBuf,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The configured `file` references an unknown variable or home directory.
    #[error("Failed to expand env file path '{template}': {message}")]
    Expansion {
        /// The configured path as written.
        template: String,
        /// Why expansion failed.
        message: String,
    },
}

/// Loads the user config from the default location. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let dir = paths::get_config_dir()?;
    load_settings_in(&dir)
}

/// Loads `config.toml` from `config_dir`. A missing file yields defaults.
pub fn load_settings_in(config_dir: &Path) -> Result<Settings, SettingsError> {
    load_settings_from(&paths::config_file_in(config_dir))
}

/// Loads the user config from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        log::debug!("No config file at '{}'; using defaults.", path.display());
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Combines command-line values with the user config.
///
/// An explicit `--file` wins over the configured `file`, which wins over `.env`.
/// The configured file may use `~` and `$VARS`. Boolean flags are OR-ed with
/// their configured defaults.
pub fn resolve_options(
    cli_file: Option<PathBuf>,
    cli_override: bool,
    cli_verbose: bool,
    settings: &Settings,
) -> Result<LoadOptions, SettingsError> {
    let file = match (cli_file, &settings.file) {
        (Some(file), _) => file,
        (None, Some(template)) => {
            let expanded = shellexpand::full(template).map_err(|e| SettingsError::Expansion {
                template: template.clone(),
                message: e.to_string(),
            })?;
            PathBuf::from(expanded.into_owned())
        }
        (None, None) => PathBuf::from(DEFAULT_ENV_FILE),
    };

    Ok(LoadOptions {
        file,
        override_env: cli_override || settings.override_env,
        verbose: cli_verbose || settings.verbose,
    })
}
