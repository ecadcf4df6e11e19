use std::io;
use std::path::PathBuf;

/// Errors that can occur while inferring or caching project targets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unsupported config shape in {path}: {reason}")]
    UnsupportedConfigShape { path: PathBuf, reason: String },

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, Error>;
