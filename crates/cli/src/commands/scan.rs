use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use next_plugin_core::next_config::StaticConfigLoader;
use next_plugin_core::plugin::is_next_config_file;
use next_plugin_core::{
    ProjectGraphFragment, TargetsCache, WorkspaceContext, create_dependencies, create_nodes,
};

use super::{parse_plugin_options, resolve_cache_dir, resolve_workspace_root};

pub async fn scan_command(
    workspace_root: Option<PathBuf>,
    options: Option<&str>,
    cache_dir: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace_root)?;
    let options = parse_plugin_options(options)?;

    let context = WorkspaceContext::load(&workspace_root)
        .with_context(|| format!("Failed to load workspace at {}", workspace_root.display()))?;
    let loader = StaticConfigLoader::new();
    let mut cache = TargetsCache::new(&resolve_cache_dir(&workspace_root, cache_dir));
    cache.load();

    let mut projects = ProjectGraphFragment::new();
    let mut discovered = 0usize;

    for entry in WalkDir::new(&workspace_root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e))
        .filter_map(|e| e.ok())
    {
        if !is_next_config_file(entry.path()) {
            continue;
        }
        discovered += 1;

        let config_path = entry
            .path()
            .strip_prefix(&workspace_root)
            .context("Walked entry outside the workspace root")?
            .to_path_buf();
        debug!("Discovered {}", config_path.display());

        let fragment = create_nodes(&config_path, options.clone(), &context, &loader, &mut cache)
            .await
            .with_context(|| format!("Failed to infer targets for {}", config_path.display()))?;
        projects.extend(fragment);
    }

    create_dependencies(&cache).context("Failed to persist targets cache")?;
    info!(
        "Discovered {discovered} config file(s), emitted {} project(s)",
        projects.len()
    );

    let output = serde_json::json!({ "projects": projects });
    if pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}
