//! Assembly of the four target descriptors emitted per Next.js project

use crate::next_config::NextSettings;
use crate::options::NormalizedOptions;
use crate::outputs::resolve_output_path;
use crate::types::{TargetDescriptor, TargetInput, TargetRunOptions, TargetsForProject};
use crate::workspace::WorkspaceContext;

/// Build the full target map for one project: build, dev, start and
/// serve-static, keyed by the normalized option names
pub fn build_next_targets(
    project_root: &str,
    options: &NormalizedOptions,
    settings: &NextSettings,
    context: &WorkspaceContext,
) -> TargetsForProject {
    let mut targets = TargetsForProject::new();

    targets.insert(
        options.build_target_name.clone(),
        build_target_config(project_root, settings, context),
    );
    targets.insert(options.dev_target_name.clone(), dev_target_config(project_root));
    targets.insert(
        options.start_target_name.clone(),
        start_target_config(options, project_root),
    );
    targets.insert(
        options.serve_static_target_name.clone(),
        static_serve_target_config(options),
    );

    targets
}

fn build_target_config(
    project_root: &str,
    settings: &NextSettings,
    context: &WorkspaceContext,
) -> TargetDescriptor {
    let output_path = resolve_output_path(project_root, settings);

    // The output path is embedded here so that command-wrapping helpers,
    // which only see static target configuration, can pick it up. The second
    // entry excludes the framework's incremental-compilation cache directory
    // from artifact restoration.
    TargetDescriptor {
        command: Some("next build".into()),
        options: Some(TargetRunOptions::Command {
            cwd: project_root.to_string(),
        }),
        depends_on: Some(vec!["^build".into()]),
        cache: Some(true),
        inputs: Some(build_target_inputs(context)),
        outputs: Some(vec![output_path.clone(), format!("{output_path}/!(cache)")]),
        ..Default::default()
    }
}

fn dev_target_config(project_root: &str) -> TargetDescriptor {
    TargetDescriptor {
        command: Some("next dev".into()),
        options: Some(TargetRunOptions::Command {
            cwd: project_root.to_string(),
        }),
        ..Default::default()
    }
}

fn start_target_config(options: &NormalizedOptions, project_root: &str) -> TargetDescriptor {
    TargetDescriptor {
        command: Some("next start".into()),
        options: Some(TargetRunOptions::Command {
            cwd: project_root.to_string(),
        }),
        depends_on: Some(vec![options.build_target_name.clone()]),
        ..Default::default()
    }
}

fn static_serve_target_config(options: &NormalizedOptions) -> TargetDescriptor {
    TargetDescriptor {
        executor: Some("@nx/web:file-server".into()),
        options: Some(TargetRunOptions::FileServer {
            build_target: options.build_target_name.clone(),
            static_file_path: "{projectRoot}/out".into(),
            port: 3000,
            // Next.js routing conventions must be respected, not a generic
            // SPA fallback
            spa: false,
        }),
        ..Default::default()
    }
}

fn build_target_inputs(context: &WorkspaceContext) -> Vec<TargetInput> {
    let upstream = if context.has_named_input("production") {
        "^production"
    } else {
        "^default"
    };
    vec![
        TargetInput::named("default"),
        TargetInput::named(upstream),
        TargetInput::external_dependencies(&["next"]),
    ]
}
