// src/core/merge.rs

//! # Map Merger
//!
//! Lock-respecting override of one env map by another.

use crate::models::EnvMap;

/// Folds `newer` on top of `older` and returns the result as a new map.
///
/// Every key from both maps is present in the result. A key from `newer`
/// replaces the existing entry unless that entry is locked, in which case the
/// locked entry is kept and the newer one is discarded. Neither input is modified.
pub fn merge(older: &EnvMap, newer: &EnvMap) -> EnvMap {
    let mut result = older.clone();
    for entry in newer {
        let is_locked = result.get(&entry.key).is_some_and(|existing| existing.locked);
        if is_locked {
            log::debug!(
                "Keeping locked '{}'; ignoring new value '{}'.",
                entry.key,
                entry.value
            );
        } else {
            result.insert(entry.clone());
        }
    }
    result
}
