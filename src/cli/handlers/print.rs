// src/cli/handlers/print.rs

//! `--print` and `--export` output of a resolved environment.

use crate::models::EnvMap;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::Write;

lazy_static! {
    static ref SHELL_IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .unwrap_or_else(|e| unreachable!("invalid shell identifier pattern: {}", e));
}

/// Output format for a resolved environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintFormat {
    /// `KEY=VALUE`, verbatim.
    Plain,
    /// `export KEY=<shell-quoted VALUE>`, for `eval "$(dotenvx --export ...)"`.
    Export,
}

/// Writes the map sorted by key in the requested format.
///
/// In export mode, keys that are not valid shell identifiers are skipped with a warning.
pub fn handle(env_map: &EnvMap, format: PrintFormat, out: &mut dyn Write) -> Result<()> {
    for entry in env_map.sorted() {
        match format {
            PrintFormat::Plain => writeln!(out, "{}", entry)?,
            PrintFormat::Export => {
                if !is_shell_identifier(&entry.key) {
                    log::warn!("Skipping '{}': not a valid shell variable name.", entry.key);
                    continue;
                }
                let quoted = shlex::try_quote(&entry.value)
                    .with_context(|| format!("Cannot quote the value of '{}'", entry.key))?;
                writeln!(out, "export {}={}", entry.key, quoted)?;
            }
        }
    }
    Ok(())
}

fn is_shell_identifier(name: &str) -> bool {
    SHELL_IDENTIFIER_RE.is_match(name)
}
