use serde::{Deserialize, Serialize};

/// A declaratively described unit of work within a project.
///
/// Either a shell command with a working directory, or a delegation to an
/// external executor with its own options. Produced once, never mutated;
/// field names follow the host tool's JSON conventions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TargetRunOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<TargetInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,
}

/// Options attached to a target, shaped by what runs it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetRunOptions {
    /// Options for command targets: the working directory the command runs in
    Command { cwd: String },
    /// Options for the static file-server executor
    #[serde(rename_all = "camelCase")]
    FileServer {
        build_target: String,
        static_file_path: String,
        port: u16,
        spa: bool,
    },
}

/// A declared input of a target: either a reference to a named-input set or
/// an external-dependency marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetInput {
    Named(String),
    #[serde(rename_all = "camelCase")]
    ExternalDependencies { external_dependencies: Vec<String> },
}

impl TargetInput {
    pub fn named(name: &str) -> Self {
        TargetInput::Named(name.to_string())
    }

    pub fn external_dependencies(deps: &[&str]) -> Self {
        TargetInput::ExternalDependencies {
            external_dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }
}
