pub mod project;
pub mod target;

pub use project::{ProjectDescription, ProjectGraphFragment, TargetsForProject};
pub use target::{TargetDescriptor, TargetInput, TargetRunOptions};
