use anyhow::{Context, Result};
use std::path::PathBuf;

use next_plugin_core::next_config::StaticConfigLoader;
use next_plugin_core::{TargetsCache, WorkspaceContext, create_nodes};

use super::{parse_plugin_options, resolve_workspace_root};

/// Run the inference pipeline for one configuration file and print its
/// project fragment. Bypasses the persisted cache so the output always
/// reflects the file on disk.
pub async fn targets_command(
    config_path: PathBuf,
    workspace_root: Option<PathBuf>,
    options: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace_root)?;
    let options = parse_plugin_options(options)?;

    let context = WorkspaceContext::load(&workspace_root)
        .with_context(|| format!("Failed to load workspace at {}", workspace_root.display()))?;
    let loader = StaticConfigLoader::new();

    // Throwaway cache dir keeps this command read-only on the real snapshot.
    let temp_cache_dir = std::env::temp_dir().join("next-plugin-targets");
    let mut cache = TargetsCache::new(&temp_cache_dir);

    let fragment = create_nodes(&config_path, options, &context, &loader, &mut cache)
        .await
        .with_context(|| format!("Failed to infer targets for {}", config_path.display()))?;

    if pretty {
        println!("{}", serde_json::to_string_pretty(&fragment)?);
    } else {
        println!("{}", serde_json::to_string(&fragment)?);
    }

    Ok(())
}
