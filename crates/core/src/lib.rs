//! next-plugin-core - Next.js target inference for monorepo project graphs
//!
//! This crate provides functionality to:
//! - Evaluate discovered `next.config.{js,cjs,mjs}` files into plain settings
//! - Infer build/dev/start/serve-static target descriptors per project
//! - Memoize inferred targets in a hash-keyed, file-backed cache
pub mod cache;
pub mod error;
pub mod hash;
pub mod next_config;
pub mod options;
pub mod outputs;
pub mod plugin;
pub mod targets;
pub mod types;
pub mod workspace;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use cache::TargetsCache;
pub use next_config::{ConfigExport, ConfigFileLoader, NextSettings};
pub use options::{NormalizedOptions, PluginOptions};
pub use plugin::{NEXT_CONFIG_GLOB, create_dependencies, create_nodes};
pub use workspace::{PackageManager, WorkspaceContext};
