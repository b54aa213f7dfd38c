// src/models.rs

//! Data types shared by the resolution engine and its collaborators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

// --- ENVIRONMENT MODELS ---

/// One `KEY=VALUE` configuration variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvEntry {
    /// Variable name, never empty.
    pub key: String,
    /// Value with surrounding whitespace trimmed; inline `#` text is kept.
    pub value: String,
    /// Set when the entry was preceded by a `# LOCK` comment. Later layers cannot replace it.
    pub locked: bool,
}

impl EnvEntry {
    /// Creates an entry. The caller guarantees `key` is non-empty.
    pub fn new(key: impl Into<String>, value: impl Into<String>, locked: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            locked,
        }
    }
}

impl fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A mapping from variable name to entry.
///
/// Maps are treated as immutable snapshots: merging produces a new map and
/// leaves both inputs untouched. Iteration order is unspecified; use
/// [`EnvMap::sorted`] or [`EnvMap::to_environ`] when order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: HashMap<String, EnvEntry>,
}

impl EnvMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&EnvEntry> {
        self.entries.get(key)
    }

    /// Returns the value for `key`, if present.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.values()
    }

    /// Returns the entries sorted ascending by key.
    pub fn sorted(&self) -> Vec<&EnvEntry> {
        let mut entries: Vec<&EnvEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    /// Renders the map as `KEY=VALUE` lines, sorted by key.
    pub fn to_environ(&self) -> Vec<String> {
        self.sorted().into_iter().map(ToString::to_string).collect()
    }

    /// Owned key/value pairs, ready to hand to `Command::envs`.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .values()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    /// Folds `newer` on top of this map. See [`crate::core::merge::merge`].
    pub fn merge(&self, newer: &Self) -> Self {
        crate::core::merge::merge(self, newer)
    }

    /// Lists the keys whose values differ in `after`. See [`crate::core::diff::diff`].
    pub fn diff(&self, after: &Self) -> EnvDiff {
        crate::core::diff::diff(self, after)
    }

    /// Inserts or replaces an entry. Only used while a map is being assembled.
    pub(crate) fn insert(&mut self, entry: EnvEntry) {
        if entry.key.is_empty() {
            log::warn!("Refusing to insert an entry with an empty key.");
            return;
        }
        self.entries.insert(entry.key.clone(), entry);
    }
}

/// Builds a map from entries; a later entry with the same key wins.
impl FromIterator<EnvEntry> for EnvMap {
    fn from_iter<I: IntoIterator<Item = EnvEntry>>(iter: I) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.insert(entry);
        }
        map
    }
}

impl<'a> IntoIterator for &'a EnvMap {
    type Item = &'a EnvEntry;
    type IntoIter = std::collections::hash_map::Values<'a, String, EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// A single value change between two maps. An absent side is the empty string.
///
/// Field order matters: the derived `Ord` sorts by key first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiffEntry {
    /// The variable whose value changed.
    pub key: String,
    /// Value before the change, empty if the key was absent.
    pub before: String,
    /// Value after the change, empty if the key is gone.
    pub after: String,
}

impl DiffEntry {
    /// Creates a diff entry.
    pub fn new(
        key: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Deduplicated diff entries, sorted ascending by key.
pub type EnvDiff = Vec<DiffEntry>;

// --- CONFIGURATION MODELS ---

/// The user configuration file (`config.toml`).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default env file, used when `--file` is not given. May contain `~` and `$VARS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Apply the chain even without `--override`.
    #[serde(default, rename = "override")]
    pub override_env: bool,
    /// Report loaded files and diffs even without `--verbose`.
    #[serde(default)]
    pub verbose: bool,
}

/// The effective options after combining the command line, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// The env file whose chain is loaded.
    pub file: PathBuf,
    /// Apply the chain on top of the process environment.
    pub override_env: bool,
    /// Report diffs while loading.
    pub verbose: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(crate::constants::DEFAULT_ENV_FILE),
            override_env: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_last_occurrence_wins() {
        let map: EnvMap = vec![
            EnvEntry::new("KEY", "first", true),
            EnvEntry::new("KEY", "second", false),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        let entry = map.get("KEY").unwrap();
        assert_eq!(entry.value, "second");
        assert!(!entry.locked);
    }

    #[test]
    fn test_from_iter_skips_empty_keys() {
        let map: EnvMap = vec![EnvEntry::new("", "orphan", false)].into_iter().collect();
        assert!(map.is_empty());
    }

    #[test]
    fn test_to_environ_is_sorted() {
        let map: EnvMap = vec![
            EnvEntry::new("ZED", "z", false),
            EnvEntry::new("ALPHA", "a=b", false),
            EnvEntry::new("MID", "", false),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.to_environ(), vec!["ALPHA=a=b", "MID=", "ZED=z"]);
    }

    #[test]
    fn test_settings_reject_unknown_fields() {
        let result: Result<Settings, _> = toml::from_str("overide = true");
        assert!(result.is_err(), "Should fail due to unknown field 'overide'");
    }

    #[test]
    fn test_settings_override_rename() {
        let settings: Settings = toml::from_str("override = true\nfile = \".env.local\"").unwrap();
        assert!(settings.override_env);
        assert!(!settings.verbose);
        assert_eq!(settings.file.as_deref(), Some(".env.local"));
    }
}
