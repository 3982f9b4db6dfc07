//! Error types for the `ideas` binary.
//!
//! Library failures pass through unchanged as [`AppError::Idea`]; the rest
//! covers workspace setup, configuration, and output encoding.

use std::path::PathBuf;
use thiserror::Error;

pub use ideas_lib::{IdeaError, ValidationError};

/// Primary error type for CLI operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Idea list or storage error.
    #[error(transparent)]
    Idea(#[from] IdeaError),

    // === Workspace Errors ===
    /// `init` found an existing data file.
    #[error("Already initialized: {} exists (use --force to overwrite)", path.display())]
    AlreadyInitialized { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML config could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Idea(IdeaError::validation(field, reason))
    }
}

impl From<Vec<ValidationError>> for AppError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Idea(IdeaError::from_validation_errors(errors))
    }
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
