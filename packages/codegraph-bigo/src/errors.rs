//! Error types for codegraph-bigo
//!
//! The analysis engine itself never fails; these errors belong to the host
//! surfaces around it (config loading, file reading, watching, output).

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for host-side operations
#[derive(Debug, Error)]
pub enum BigOError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File watcher error
    #[error("Watcher error: {0}")]
    Watcher(String),

    /// Notify backend error
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File whose language cannot be inferred
    #[error("Cannot infer language of {}", .0.display())]
    UnsupportedFile(PathBuf),
}

impl BigOError {
    /// Create a watcher error
    pub fn watcher(msg: impl Into<String>) -> Self {
        BigOError::Watcher(msg.into())
    }
}

/// Result type alias for host-side operations
pub type Result<T> = std::result::Result<T, BigOError>;
