//! Error types for Arbor
//!
//! Tree operations never fail; only the edges that touch files, parsers
//! and the terminal produce an `ArborError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Arbor operations
pub type ArborResult<T> = Result<T, ArborError>;

/// Main error type for Arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    /// Dataset file could not be parsed into a tree
    #[error("invalid dataset in {file}: {message}")]
    InvalidDataset { file: PathBuf, message: String },

    /// Dataset parsed, but holds no root nodes
    #[error("dataset {file} contains no nodes")]
    EmptyDataset { file: PathBuf },

    /// Dataset extension is not one of json, yaml, yml, toml
    #[error("unsupported dataset format for {file} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { file: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No node carries the requested id
    #[error("no node with id '{id}'")]
    NodeNotFound { id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArborError {
    /// Stable machine-readable code, used by `--json` error events.
    pub fn code(&self) -> &'static str {
        match self {
            ArborError::InvalidDataset { .. } => "invalid_dataset",
            ArborError::EmptyDataset { .. } => "empty_dataset",
            ArborError::UnsupportedFormat { .. } => "unsupported_format",
            ArborError::InvalidConfig { .. } => "invalid_config",
            ArborError::NodeNotFound { .. } => "node_not_found",
            ArborError::Io(_) => "io",
            ArborError::Json(_) => "json",
        }
    }

    /// File the error refers to, when there is one.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            ArborError::InvalidDataset { file, .. }
            | ArborError::EmptyDataset { file }
            | ArborError::UnsupportedFormat { file }
            | ArborError::InvalidConfig { file, .. } => Some(file),
            ArborError::NodeNotFound { .. } | ArborError::Io(_) | ArborError::Json(_) => None,
        }
    }
}
