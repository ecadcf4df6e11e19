pub mod cache;
pub mod scan;
pub mod targets;

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use next_plugin_core::PluginOptions;

pub(crate) fn resolve_workspace_root(workspace_root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match workspace_root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("Failed to canonicalize workspace root {}", root.display()))
}

pub(crate) fn resolve_cache_dir(workspace_root: &Path, cache_dir: Option<PathBuf>) -> PathBuf {
    cache_dir.unwrap_or_else(|| workspace_root.join(".next-plugin"))
}

pub(crate) fn parse_plugin_options(options: Option<&str>) -> Result<PluginOptions> {
    match options {
        Some(json) => serde_json::from_str(json).context("Failed to parse plugin options"),
        None => Ok(PluginOptions::default()),
    }
}
