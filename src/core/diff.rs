// src/core/diff.rs

//! # Diff Engine
//!
//! Computes the per-key value changes between two env maps for verbose reporting.

use crate::models::{DiffEntry, EnvDiff, EnvMap};
use std::collections::BTreeSet;

/// Returns every key whose value differs between `before` and `after`.
///
/// A missing key counts as an empty value, so additions show up as
/// `(key, "", value)` and removals as `(key, value, "")`. Both directions are
/// scanned; identical triples collapse into one, and the result is sorted
/// ascending by key.
pub fn diff(before: &EnvMap, after: &EnvMap) -> EnvDiff {
    let mut changes = BTreeSet::new();

    for entry in after {
        let before_value = before.value(&entry.key).unwrap_or_default();
        if before_value != entry.value {
            changes.insert(DiffEntry::new(&entry.key, before_value, &entry.value));
        }
    }

    for entry in before {
        let after_value = after.value(&entry.key).unwrap_or_default();
        if after_value != entry.value {
            changes.insert(DiffEntry::new(&entry.key, &entry.value, after_value));
        }
    }

    changes.into_iter().collect()
}
