// src/system/environ.rs

//! Point-in-time snapshot of the process environment.

use crate::{
    core::parser::{self, ParsedLine},
    models::EnvMap,
};
use std::{env, ffi::OsString};

/// Captures the current process environment as an [`EnvMap`].
///
/// Non-UTF-8 names or values are converted lossily.
pub fn snapshot() -> EnvMap {
    snapshot_from(env::vars_os())
}

/// Builds a map from `(name, value)` pairs, treating each pair as a `NAME=VALUE` line.
///
/// Process variables never carry lock markers, so every entry is unlocked.
/// Pairs that do not form a valid line (for example an empty name) are skipped.
pub fn snapshot_from<I>(vars: I) -> EnvMap
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .filter_map(|line| match parser::parse_line(&line, false) {
            ParsedLine::Entry(entry) => Some(entry),
            _ => None,
        })
        .collect()
}
