use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::target::TargetDescriptor;

/// Targets inferred for one project, keyed by target name.
///
/// Ordered map so the persisted cache snapshot is deterministic.
pub type TargetsForProject = BTreeMap<String, TargetDescriptor>;

/// One project emitted into the host tool's graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub root: String,
    pub targets: TargetsForProject,
}

/// Project-graph fragment produced per node-factory invocation: project root
/// to project description, at most one entry
pub type ProjectGraphFragment = BTreeMap<String, ProjectDescription>;
