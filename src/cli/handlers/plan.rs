// src/cli/handlers/plan.rs

//! `--plan`: show which files a load would read.

use crate::core::chain;
use anyhow::Result;
use std::{io::Write, path::Path};

/// Writes the chain plan for `file`, one path per line, least specific first.
pub fn handle(file: &Path, out: &mut dyn Write) -> Result<()> {
    for path in chain::plan_chain(file)? {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
