//! Node factory: one invocation per discovered configuration file

use std::path::Path;
use tracing::debug;

use crate::cache::TargetsCache;
use crate::error::Result;
use crate::hash::hash_create_nodes_inputs;
use crate::next_config::{ConfigFileLoader, resolve_config_export};
use crate::options::PluginOptions;
use crate::targets::build_next_targets;
use crate::types::{ProjectDescription, ProjectGraphFragment};
use crate::workspace::{PackageManager, WorkspaceContext};

/// Glob the host tool matches configuration files against
pub const NEXT_CONFIG_GLOB: &str = "**/next.config.{js,cjs,mjs}";

/// Whether a file name matches the configuration naming convention
pub fn is_next_config_file(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|name| name.to_str()),
        Some("next.config.js" | "next.config.cjs" | "next.config.mjs")
    )
}

/// Infer the project-graph fragment for one configuration file.
///
/// `config_file_path` is relative to the workspace root. Directories without
/// a package or project manifest yield an empty fragment. Results are served
/// from the cache when the content hash matches a prior run, skipping config
/// evaluation entirely; every result is recorded into the accumulator for the
/// next snapshot.
pub async fn create_nodes(
    config_file_path: &Path,
    options: PluginOptions,
    context: &WorkspaceContext,
    loader: &dyn ConfigFileLoader,
    cache: &mut TargetsCache,
) -> Result<ProjectGraphFragment> {
    let project_root = project_root_of(config_file_path);

    // A config file without a package.json or project.json sibling does not
    // define a standalone project (nested example folders, fixtures).
    if !has_project_markers(&context.workspace_root.join(&project_root))? {
        debug!("Skipping {project_root}: no package.json or project.json sibling");
        return Ok(ProjectGraphFragment::new());
    }

    let options = options.normalize();

    let package_manager = PackageManager::detect(&context.workspace_root);
    let lock_file = context.workspace_root.join(package_manager.lock_file_name());
    let hash = hash_create_nodes_inputs(&project_root, &options, &[&lock_file])?;

    let targets = match cache.get(&hash) {
        Some(targets) => {
            debug!("Cache hit for {project_root} ({hash})");
            targets.clone()
        }
        None => {
            let export = loader.load(&context.workspace_root.join(config_file_path)).await?;
            let settings = resolve_config_export(export).await?;
            build_next_targets(&project_root, &options, &settings, context)
        }
    };

    cache.record(hash, targets.clone());

    Ok(ProjectGraphFragment::from([(
        project_root.clone(),
        ProjectDescription {
            root: project_root,
            targets,
        },
    )]))
}

/// Dependency-computation stage: persists everything recorded this run.
/// Runs once per process, after all node-factory calls have completed.
pub fn create_dependencies(cache: &TargetsCache) -> Result<()> {
    cache.flush()
}

fn project_root_of(config_file_path: &Path) -> String {
    match config_file_path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

fn has_project_markers(project_dir: &Path) -> Result<bool> {
    for entry in std::fs::read_dir(project_dir)? {
        let entry = entry?;
        if entry.file_name() == "package.json" || entry.file_name() == "project.json" {
            return Ok(true);
        }
    }
    Ok(false)
}
