// src/core/parser.rs

//! # Line Parser & Map Builder
//!
//! Turns raw `.env` text into an [`EnvMap`]. Parsing is deliberately lenient:
//! anything that is not a full-line comment or a `KEY=VALUE` pair is skipped
//! without raising an error, so a partially broken file still yields its
//! usable entries.

use crate::{
    constants::{COMMENT_PREFIX, LOCK_MARKER},
    models::{EnvEntry, EnvMap},
};

/// The outcome of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A valid `KEY=VALUE` pair.
    Entry(EnvEntry),
    /// A full-line comment. `lock` is set for a `# LOCK` marker.
    Comment {
        /// True for a `# LOCK` marker.
        lock: bool,
    },
    /// Blank line, missing `=`, or empty key.
    Invalid,
}

/// Returns true if the trimmed line starts with `#`.
pub fn is_full_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_PREFIX)
}

/// Parses one line. `locked` is the pending lock flag carried over from earlier lines.
///
/// The key and value are trimmed at both ends only, so `KEY=a # b` keeps
/// `a # b` as its value.
pub fn parse_line(line: &str, locked: bool) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.starts_with(COMMENT_PREFIX) {
        return ParsedLine::Comment {
            lock: trimmed.starts_with(LOCK_MARKER),
        };
    }

    let Some((key, value)) = line.split_once('=') else {
        return ParsedLine::Invalid;
    };
    let key = key.trim();
    if key.is_empty() {
        return ParsedLine::Invalid;
    }
    ParsedLine::Entry(EnvEntry::new(key, value.trim(), locked))
}

/// Builds a map from an ordered sequence of lines.
///
/// A `# LOCK` comment arms the lock flag; the next parsed entry consumes it.
/// Other comments leave the flag as it is. Within one sequence the last
/// occurrence of a key wins.
pub fn build_env_map<I, S>(lines: I) -> EnvMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = EnvMap::new();
    let mut locked = false;

    for line in lines {
        let line = line.as_ref();
        match parse_line(line, locked) {
            ParsedLine::Entry(entry) => {
                if entry.locked {
                    log::trace!("Entry '{}' is locked.", entry.key);
                }
                map.insert(entry);
                locked = false;
            }
            ParsedLine::Comment { lock: true } => locked = true,
            ParsedLine::Comment { lock: false } => {}
            ParsedLine::Invalid => {
                if !line.trim().is_empty() {
                    log::trace!("Skipping unparseable line: '{}'", line);
                }
            }
        }
    }
    map
}

/// Builds a map from the full text of an env file.
pub fn parse_env_str(content: &str) -> EnvMap {
    build_env_map(content.lines())
}
