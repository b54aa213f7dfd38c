// src/core/loader.rs

//! # Loader
//!
//! Drives the chain planner, parser and merger across every file of a chain,
//! starting from an explicit snapshot of the process environment. The loader
//! never touches the live environment itself; committing the result (for
//! example into a child process) is left to the caller.

use crate::{
    core::{
        chain::{self, ChainError},
        parser,
    },
    dev_utils,
    models::{EnvDiff, EnvMap},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that abort a chain load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The chain could not be planned.
    #[error(transparent)]
    InvalidPath(#[from] ChainError),
    /// A file of the chain could not be read.
    #[error("Could not read env file '{path}': {source}")]
    FileRead {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Receives progress notifications while a chain is being applied.
///
/// Both methods default to doing nothing.
pub trait LoadObserver {
    /// Called before each file of the chain is read.
    fn file_loading(&mut self, _path: &Path) {}

    /// Called in verbose mode with the diff between the running map and the file just parsed.
    fn diff_computed(&mut self, _path: &Path, _diff: &EnvDiff) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl LoadObserver for SilentObserver {}

/// Reads and parses a single env file.
///
/// # Errors
/// Returns [`LoadError::FileRead`] if the file cannot be read as UTF-8 text.
pub fn read_env_file(path: &Path) -> Result<EnvMap, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parser::parse_env_str(&content);
    log::debug!("Parsed {} entries from '{}'", map.len(), path.display());
    Ok(map)
}

/// Resolves the final env map for `path`.
///
/// The chain is always planned, so an empty path fails even when
/// `override_env` is false. Without `override_env` the snapshot is returned
/// unchanged. Otherwise each planned file is parsed and merged on top of the
/// running map, in order; with `verbose` the observer also receives the diff
/// between the running map and each newly parsed file.
///
/// # Errors
/// - [`LoadError::InvalidPath`] if `path` is empty.
/// - [`LoadError::FileRead`] for the first chain file that cannot be read. The
///   remaining files are not loaded.
pub fn load_chain(
    path: &Path,
    snapshot: EnvMap,
    override_env: bool,
    verbose: bool,
    observer: &mut dyn LoadObserver,
) -> Result<EnvMap, LoadError> {
    let _timer = dev_utils::BlockTimer::new("load_chain");
    let plan = chain::plan_chain(path)?;

    if !override_env {
        log::debug!(
            "Override disabled; keeping the process environment ({} planned file(s) not applied).",
            plan.len()
        );
        return Ok(snapshot);
    }

    let mut env_map = snapshot;
    for file in &plan {
        observer.file_loading(file);
        let layer = read_env_file(file)?;
        if verbose {
            let changes = env_map.diff(&layer);
            observer.diff_computed(file, &changes);
        }
        env_map = env_map.merge(&layer);
    }
    Ok(env_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiffEntry, EnvEntry};
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingObserver {
        loaded: Vec<PathBuf>,
        diffs: Vec<(PathBuf, EnvDiff)>,
    }

    impl LoadObserver for RecordingObserver {
        fn file_loading(&mut self, path: &Path) {
            self.loaded.push(path.to_path_buf());
        }

        fn diff_computed(&mut self, path: &Path, diff: &EnvDiff) {
            self.diffs.push((path.to_path_buf(), diff.clone()));
        }
    }

    fn snapshot(entries: &[(&str, &str)]) -> EnvMap {
        entries
            .iter()
            .map(|(k, v)| EnvEntry::new(*k, *v, false))
            .collect()
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_path_fails_even_without_override() {
        let result = load_chain(Path::new(""), EnvMap::new(), false, false, &mut SilentObserver);
        assert!(matches!(result, Err(LoadError::InvalidPath(ChainError::InvalidPath))));
    }

    #[test]
    fn test_no_override_returns_snapshot_unchanged() {
        let dir = TempDir::new().unwrap();
        write(&dir, "app.env", "HOME=/overridden\n");
        let path = write(&dir, "app.env.prod", "NEW=1\n");
        let base = snapshot(&[("HOME", "/home/user")]);

        let mut observer = RecordingObserver::default();
        let result = load_chain(&path, base.clone(), false, true, &mut observer).unwrap();

        assert_eq!(result, base);
        assert!(observer.loaded.is_empty());
        assert!(observer.diffs.is_empty());
    }

    #[test]
    fn test_no_override_ignores_missing_files() {
        let result = load_chain(
            Path::new("/definitely/not/here/app.env.prod"),
            snapshot(&[("A", "1")]),
            false,
            false,
            &mut SilentObserver,
        );
        assert_eq!(result.unwrap(), snapshot(&[("A", "1")]));
    }

    #[test]
    fn test_chain_applies_layers_in_order_respecting_locks() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "app.env",
            "# LOCK\nREGION=eu-west-1\nLOG_LEVEL=info\nDB_HOST=localhost\n",
        );
        write(&dir, "app.env.production", "LOG_LEVEL=warn\nREGION=us-east-1\n");
        let path = write(&dir, "app.env.production.api", "LOG_LEVEL=error\nPORT=8080\n");

        let mut observer = RecordingObserver::default();
        let result = load_chain(&path, snapshot(&[("PATH", "/bin")]), true, false, &mut observer)
            .unwrap();

        assert_eq!(result.value("PATH"), Some("/bin"));
        assert_eq!(result.value("REGION"), Some("eu-west-1"));
        assert!(result.get("REGION").unwrap().locked);
        assert_eq!(result.value("LOG_LEVEL"), Some("error"));
        assert_eq!(result.value("DB_HOST"), Some("localhost"));
        assert_eq!(result.value("PORT"), Some("8080"));
        assert_eq!(
            observer.loaded,
            vec![
                dir.path().join("app.env"),
                dir.path().join("app.env.production"),
                path.clone(),
            ]
        );
        assert!(observer.diffs.is_empty(), "diffs are only computed in verbose mode");
    }

    #[test]
    fn test_file_lock_cannot_override_snapshot_value() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ".env", "# LOCK\nUSER=locked-user\n");

        let result = load_chain(&path, snapshot(&[("USER", "alice")]), true, false, &mut SilentObserver)
            .unwrap();

        // The snapshot entry is unlocked, so the file wins and brings its lock along.
        assert_eq!(result.value("USER"), Some("locked-user"));
        assert!(result.get("USER").unwrap().locked);
    }

    #[test]
    fn test_verbose_reports_diff_against_running_map() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, ".env", "A=2\nB=new\n");

        let mut observer = RecordingObserver::default();
        load_chain(&path, snapshot(&[("A", "1"), ("C", "keep")]), true, true, &mut observer).unwrap();

        assert_eq!(observer.diffs.len(), 1);
        let (file, changes) = &observer.diffs[0];
        assert_eq!(file, &path);
        assert_eq!(
            changes,
            &vec![
                DiffEntry::new("A", "1", "2"),
                DiffEntry::new("B", "", "new"),
                DiffEntry::new("C", "keep", ""),
            ]
        );
    }

    #[test]
    fn test_missing_chain_file_aborts_load() {
        let dir = TempDir::new().unwrap();
        write(&dir, "app.env", "A=1\n");
        let path = dir.path().join("app.env.staging");

        let mut observer = RecordingObserver::default();
        let result = load_chain(&path, EnvMap::new(), true, false, &mut observer);

        match result {
            Err(LoadError::FileRead { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
        assert_eq!(observer.loaded.len(), 2);
    }

    #[test]
    fn test_read_env_file_missing() {
        let result = read_env_file(Path::new("non_existent_env_file_for_test.env"));
        assert!(matches!(result, Err(LoadError::FileRead { .. })));
    }
}
