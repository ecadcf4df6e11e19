use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use next_plugin_core::TargetsCache;

use super::{resolve_cache_dir, resolve_workspace_root};

pub fn clear_command(workspace_root: Option<PathBuf>, cache_dir: Option<PathBuf>) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace_root)?;
    let cache = TargetsCache::new(&resolve_cache_dir(&workspace_root, cache_dir));
    let snapshot_path = cache.snapshot_path();

    if snapshot_path.exists() {
        fs::remove_file(snapshot_path)
            .with_context(|| format!("Failed to remove {}", snapshot_path.display()))?;
        println!("Removed {}", snapshot_path.display());
    } else {
        println!("No cache snapshot at {}", snapshot_path.display());
    }

    Ok(())
}
