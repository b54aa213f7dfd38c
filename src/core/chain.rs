// src/core/chain.rs

//! # Chain Planner
//!
//! Expands a dotted env file name into the ordered list of files to load.
//! `app.config.env.production.api` becomes
//! `app.config.env` -> `app.config.env.production` -> `app.config.env.production.api`.

use crate::constants::CHAIN_ANCHOR;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while planning a chain.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// The supplied path was empty.
    #[error("Invalid env file path: the path is empty.")]
    InvalidPath,
}

/// Computes the chain of files to load for `path`, least specific first.
///
/// The chain only expands when the base name has more than two dot-separated
/// segments and one of them is exactly `env`. Otherwise the plan is `path` alone.
///
/// # Errors
/// Returns [`ChainError::InvalidPath`] if `path` is empty.
pub fn plan_chain(path: &Path) -> Result<Vec<PathBuf>, ChainError> {
    if path.as_os_str().is_empty() {
        return Err(ChainError::InvalidPath);
    }

    let Some(base) = path.file_name().and_then(|name| name.to_str()) else {
        log::debug!(
            "Path '{}' has no usable file name; planning it as-is.",
            path.display()
        );
        return Ok(vec![path.to_path_buf()]);
    };
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    let parts: Vec<&str> = base.split('.').collect();
    if parts.len() <= 2 {
        return Ok(vec![path.to_path_buf()]);
    }

    let Some(anchor) = parts.iter().position(|part| *part == CHAIN_ANCHOR) else {
        return Ok(vec![path.to_path_buf()]);
    };

    let plan: Vec<PathBuf> = (anchor + 1..=parts.len())
        .map(|end| dir.join(parts.iter().take(end).copied().collect::<Vec<_>>().join(".")))
        .collect();

    log::debug!(
        "Planned chain for '{}': {:?}",
        path.display(),
        plan.iter().map(|p| p.display().to_string()).collect::<Vec<_>>()
    );
    Ok(plan)
}
