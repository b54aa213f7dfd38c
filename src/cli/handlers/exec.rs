// src/cli/handlers/exec.rs

//! Hands the resolved environment to the user's command.

use crate::{models::EnvMap, system::executor};
use anyhow::Result;

/// Runs `args` with `env_map` as the complete environment and returns the exit code.
///
/// On Unix this replaces the current process and only returns on failure.
pub fn handle(args: &[String], env_map: &EnvMap) -> Result<i32> {
    log::debug!("Running command: {:?}", args);
    Ok(executor::exec_with_env(args, env_map)?)
}
