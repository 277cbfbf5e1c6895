//! Error types for the fallible edges: files, configuration, encoding.
//!
//! The analysis pipeline itself never fails.

use thiserror::Error;

/// Result alias for chordmap operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading input or writing an export file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A JSON document that is not a chord map export.
    #[error("Invalid export: {0}")]
    InvalidExport(String),
}
