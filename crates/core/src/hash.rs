//! Cache-key derivation for node-factory invocations

use std::path::Path;

use crate::error::Result;
use crate::options::NormalizedOptions;

/// Compute the memoization key for one discovered configuration file.
///
/// Deterministic over the project root, the normalized plugin options, and
/// the identity (name and content digest) of each listed file, so repeated
/// runs over an unchanged workspace reuse cached targets.
pub fn hash_create_nodes_inputs(
    project_root: &str,
    options: &NormalizedOptions,
    extra_files: &[&Path],
) -> Result<String> {
    let mut input = String::new();
    input.push_str(project_root);
    input.push('\0');
    input.push_str(&serde_json::to_string(options)?);

    for file in extra_files {
        input.push('\0');
        input.push_str(&file.to_string_lossy());
        input.push('=');
        input.push_str(&file_digest(file)?);
    }

    Ok(format!("{:x}", md5::compute(input.as_bytes())))
}

/// Content digest of a single file; missing files get a placeholder so that
/// a workspace without a lock file still hashes deterministically
pub fn file_digest(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok("non-existent".to_string());
    }
    let contents = std::fs::read(path)?;
    Ok(format!("{:x}", md5::compute(&contents)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PluginOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_is_stable_across_runs() {
        let temp_dir = TempDir::new().unwrap();
        let lock_file = temp_dir.path().join("yarn.lock");
        fs::write(&lock_file, "# yarn lockfile v1").unwrap();

        let options = PluginOptions::default().normalize();
        let first =
            hash_create_nodes_inputs("apps/site", &options, &[&lock_file]).unwrap();
        let second =
            hash_create_nodes_inputs("apps/site", &options, &[&lock_file]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hash_varies_with_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let lock_file = temp_dir.path().join("yarn.lock");
        fs::write(&lock_file, "# yarn lockfile v1").unwrap();

        let options = PluginOptions::default().normalize();
        let base = hash_create_nodes_inputs("apps/site", &options, &[&lock_file]).unwrap();

        let other_root =
            hash_create_nodes_inputs("apps/docs", &options, &[&lock_file]).unwrap();
        assert_ne!(base, other_root);

        let renamed = PluginOptions {
            build_target_name: Some("compile".into()),
            ..Default::default()
        }
        .normalize();
        let other_options =
            hash_create_nodes_inputs("apps/site", &renamed, &[&lock_file]).unwrap();
        assert_ne!(base, other_options);

        fs::write(&lock_file, "# yarn lockfile v2").unwrap();
        let other_lock =
            hash_create_nodes_inputs("apps/site", &options, &[&lock_file]).unwrap();
        assert_ne!(base, other_lock);
    }

    #[test]
    fn test_missing_file_digest_placeholder() {
        let digest = file_digest(Path::new("/does/not/exist.lock")).unwrap();
        assert_eq!(digest, "non-existent");
    }
}
