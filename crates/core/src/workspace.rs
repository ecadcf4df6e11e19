use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Package manager in use at the workspace root, detected from lock files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Probe the workspace root for a lock file; npm is the fallback
    pub fn detect(workspace_root: &Path) -> Self {
        if workspace_root.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else if workspace_root.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if workspace_root.join("bun.lockb").exists() {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    pub fn lock_file_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Bun => "bun.lockb",
        }
    }
}

/// Workspace-level context the host tool hands to each node-factory call
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    pub workspace_root: PathBuf,
    /// Workspace named-input sets, keyed by input name
    pub named_inputs: BTreeMap<String, Vec<Value>>,
}

#[derive(Deserialize)]
struct WorkspaceManifest {
    #[serde(rename = "namedInputs", default)]
    named_inputs: BTreeMap<String, Vec<Value>>,
}

impl WorkspaceContext {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        WorkspaceContext {
            workspace_root: workspace_root.into(),
            named_inputs: Self::default_named_inputs(),
        }
    }

    /// Build a context from the workspace manifest (`nx.json`), if present.
    /// Manifest named inputs are merged over the built-in `default` set.
    pub fn load(workspace_root: impl Into<PathBuf>) -> Result<Self> {
        let mut context = Self::new(workspace_root);

        let manifest_path = context.workspace_root.join("nx.json");
        if manifest_path.exists() {
            let contents = std::fs::read_to_string(&manifest_path)?;
            let manifest: WorkspaceManifest = serde_json::from_str(&contents)?;
            debug!(
                "Loaded {} named input set(s) from {}",
                manifest.named_inputs.len(),
                manifest_path.display()
            );
            context.named_inputs.extend(manifest.named_inputs);
        }

        Ok(context)
    }

    pub fn has_named_input(&self, name: &str) -> bool {
        self.named_inputs.contains_key(name)
    }

    fn default_named_inputs() -> BTreeMap<String, Vec<Value>> {
        BTreeMap::from([("default".to_string(), vec![Value::from("{projectRoot}/**/*")])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_package_manager() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        assert_eq!(PackageManager::detect(root), PackageManager::Npm);

        fs::write(root.join("pnpm-lock.yaml"), "lockfileVersion: 9").unwrap();
        assert_eq!(PackageManager::detect(root), PackageManager::Pnpm);

        // yarn.lock wins over pnpm-lock.yaml when both exist
        fs::write(root.join("yarn.lock"), "# yarn lockfile v1").unwrap();
        assert_eq!(PackageManager::detect(root), PackageManager::Yarn);
    }

    #[test]
    fn test_lock_file_names() {
        assert_eq!(PackageManager::Npm.lock_file_name(), "package-lock.json");
        assert_eq!(PackageManager::Yarn.lock_file_name(), "yarn.lock");
        assert_eq!(PackageManager::Pnpm.lock_file_name(), "pnpm-lock.yaml");
        assert_eq!(PackageManager::Bun.lock_file_name(), "bun.lockb");
    }

    #[test]
    fn test_context_without_manifest_has_default_input() {
        let temp_dir = TempDir::new().unwrap();
        let context = WorkspaceContext::load(temp_dir.path()).unwrap();
        assert!(context.has_named_input("default"));
        assert!(!context.has_named_input("production"));
    }

    #[test]
    fn test_context_merges_manifest_named_inputs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("nx.json"),
            r#"{"namedInputs": {"production": ["default", "!{projectRoot}/**/*.spec.ts"]}}"#,
        )
        .unwrap();

        let context = WorkspaceContext::load(temp_dir.path()).unwrap();
        assert!(context.has_named_input("default"));
        assert!(context.has_named_input("production"));
    }
}
