//! Hash-keyed, file-backed memoization of inferred targets

pub mod targets_cache;

pub use targets_cache::TargetsCache;
