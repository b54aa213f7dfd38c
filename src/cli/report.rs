// src/cli/report.rs

//! Human-readable progress report for chain loads.

use crate::{core::loader::LoadObserver, models::EnvDiff};
use colored::Colorize;
use std::{io::Write, path::Path};

/// Writes load progress and diffs to a sink.
///
/// The binary builds it on stderr, keeping stdout free for `--print`/`--export`.
/// Write failures are logged and otherwise ignored; the report never aborts a load.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LoadObserver for Reporter<W> {
    fn file_loading(&mut self, path: &Path) {
        let line = format!("Loading {}", path.display());
        if let Err(e) = writeln!(self.out, "{} {}", "--->".dimmed(), line.green()) {
            log::warn!("Failed to write load report: {}", e);
        }
    }

    fn diff_computed(&mut self, _path: &Path, diff: &EnvDiff) {
        for item in diff {
            if let Err(e) = writeln!(
                self.out,
                "     Overrided {}: {} -> {}",
                item.key.cyan(),
                item.before.dimmed(),
                item.after.yellow()
            ) {
                log::warn!("Failed to write load report: {}", e);
                return;
            }
        }
    }
}
