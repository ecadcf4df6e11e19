use crate::next_config::NextSettings;

/// Conventional Next.js build output directory
pub const DEFAULT_DIST_DIR: &str = ".next";

/// Derive the output path token for a project's build artifacts.
///
/// The host tool resolves `{projectRoot}` relative to each project, which
/// breaks when the project root is the workspace root itself, so the `.`
/// case keeps the `{projectRoot}` token while every other root is addressed
/// from `{workspaceRoot}`.
pub fn resolve_output_path(project_root: &str, settings: &NextSettings) -> String {
    let dist_dir = settings.dist_dir.as_deref().unwrap_or(DEFAULT_DIST_DIR);

    if project_root == "." {
        format!("{{projectRoot}}/{dist_dir}")
    } else {
        format!("{{workspaceRoot}}/{project_root}/{dist_dir}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dist_dir() {
        let settings = NextSettings::default();
        assert_eq!(
            resolve_output_path("apps/site", &settings),
            "{workspaceRoot}/apps/site/.next"
        );
    }

    #[test]
    fn test_dist_dir_override() {
        let settings = NextSettings::with_dist_dir("build");
        assert_eq!(
            resolve_output_path("apps/site", &settings),
            "{workspaceRoot}/apps/site/build"
        );
    }

    #[test]
    fn test_workspace_root_project() {
        let settings = NextSettings::with_dist_dir("build");
        assert_eq!(resolve_output_path(".", &settings), "{projectRoot}/build");

        assert_eq!(
            resolve_output_path(".", &NextSettings::default()),
            "{projectRoot}/.next"
        );
    }
}
