// src/cli/handlers/commons.rs

//! Shared steps used by several handlers.

use crate::{
    cli::Cli,
    core::loader::{self, LoadObserver},
    models::{EnvMap, LoadOptions},
    system::{environ, settings},
};
use anyhow::{Context, Result};

/// Combines the command line with the user config file into the effective options.
pub fn resolve_options(cli: &Cli) -> Result<LoadOptions> {
    let user_settings = settings::load_settings().context("Failed to load user configuration")?;
    let options = settings::resolve_options(
        cli.file.clone(),
        cli.override_env,
        cli.verbose,
        &user_settings,
    )?;
    log::debug!("Effective options: {:?}", options);
    Ok(options)
}

/// Snapshots the process environment and applies the env file chain on top of it.
pub fn resolve_env(options: &LoadOptions, observer: &mut dyn LoadObserver) -> Result<EnvMap> {
    let env_map = loader::load_chain(
        &options.file,
        environ::snapshot(),
        options.override_env,
        options.verbose,
        observer,
    )?;
    Ok(env_map)
}
