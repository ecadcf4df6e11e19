use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::TargetsForProject;

const SNAPSHOT_FILE: &str = "next-targets.json";

/// Process-lifetime cache of inferred targets, keyed by content hash.
///
/// Entries loaded from a prior run's snapshot answer lookups; entries
/// computed (or reused) during this run accumulate separately and replace the
/// snapshot wholesale on [`TargetsCache::flush`].
#[derive(Debug)]
pub struct TargetsCache {
    snapshot_path: PathBuf,
    loaded: BTreeMap<String, TargetsForProject>,
    accumulator: BTreeMap<String, TargetsForProject>,
}

impl TargetsCache {
    pub fn new(cache_dir: &Path) -> Self {
        TargetsCache {
            snapshot_path: cache_dir.join(SNAPSHOT_FILE),
            loaded: BTreeMap::new(),
            accumulator: BTreeMap::new(),
        }
    }

    /// Populate the lookup map from the persisted snapshot, if one exists.
    /// A missing or corrupt snapshot is a cold start, never an error.
    pub fn load(&mut self) {
        if !self.snapshot_path.exists() {
            return;
        }

        match std::fs::read_to_string(&self.snapshot_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => {
                    self.loaded = entries;
                    debug!(
                        "Loaded {} cached target set(s) from {}",
                        self.loaded.len(),
                        self.snapshot_path.display()
                    );
                }
                Err(e) => {
                    warn!(
                        "Ignoring corrupt targets cache at {}: {e}",
                        self.snapshot_path.display()
                    );
                }
            },
            Err(e) => {
                warn!(
                    "Ignoring unreadable targets cache at {}: {e}",
                    self.snapshot_path.display()
                );
            }
        }
    }

    pub fn get(&self, hash: &str) -> Option<&TargetsForProject> {
        self.loaded.get(hash)
    }

    /// Record targets computed (or reused) during this run. Each node-factory
    /// call writes its own hash, so inserts never race on a key.
    pub fn record(&mut self, hash: String, targets: TargetsForProject) {
        self.accumulator.insert(hash, targets);
    }

    /// Serialize the accumulator over the snapshot file, replacing any prior
    /// content. A failed write surfaces to the caller; in-memory state is
    /// untouched either way.
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.accumulator)
            .map_err(|e| Error::CacheError(format!("Failed to serialize targets cache: {e}")))?;
        std::fs::write(&self.snapshot_path, contents)?;
        debug!(
            "Wrote {} target set(s) to {}",
            self.accumulator.len(),
            self.snapshot_path.display()
        );
        Ok(())
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TargetDescriptor;
    use std::fs;
    use tempfile::TempDir;

    fn sample_targets(command: &str) -> TargetsForProject {
        TargetsForProject::from([(
            "build".to_string(),
            TargetDescriptor {
                command: Some(command.to_string()),
                ..Default::default()
            },
        )])
    }

    #[test]
    fn test_round_trip_through_snapshot() {
        let temp_dir = TempDir::new().unwrap();

        let mut cache = TargetsCache::new(temp_dir.path());
        cache.load();
        assert!(cache.get("abc").is_none());

        cache.record("abc".to_string(), sample_targets("next build"));
        cache.flush().unwrap();

        let mut reloaded = TargetsCache::new(temp_dir.path());
        reloaded.load();
        assert_eq!(reloaded.get("abc"), Some(&sample_targets("next build")));
    }

    #[test]
    fn test_corrupt_snapshot_is_cold_start() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SNAPSHOT_FILE), "{ not json").unwrap();

        let mut cache = TargetsCache::new(temp_dir.path());
        cache.load();
        assert!(cache.get("abc").is_none());
    }

    #[test]
    fn test_flush_overwrites_rather_than_merges() {
        let temp_dir = TempDir::new().unwrap();

        let mut cache = TargetsCache::new(temp_dir.path());
        cache.record("old".to_string(), sample_targets("next build"));
        cache.flush().unwrap();

        // A later process computes a different set of entries.
        let mut cache = TargetsCache::new(temp_dir.path());
        cache.load();
        cache.record("new".to_string(), sample_targets("next build"));
        cache.flush().unwrap();

        let mut reloaded = TargetsCache::new(temp_dir.path());
        reloaded.load();
        assert!(reloaded.get("old").is_none());
        assert!(reloaded.get("new").is_some());
    }

    #[test]
    fn test_get_reads_loaded_entries_not_accumulator() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = TargetsCache::new(temp_dir.path());
        cache.record("abc".to_string(), sample_targets("next build"));
        assert!(cache.get("abc").is_none());
    }
}
