//! Error types for `ideas-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for idea list operations.
#[derive(Error, Debug)]
pub enum IdeaError {
    // === Selection Errors ===
    /// Random pick attempted on a list with no ideas.
    #[error("Cannot pick an idea: the list is empty")]
    EmptyList,

    /// Index does not address an idea in the list.
    #[error("Idea index {index} out of range (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Storage Errors ===
    /// The backing text file could not be read.
    #[error("Cannot read ideas from {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing text file could not be written.
    #[error("Cannot save ideas to {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl IdeaError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// True for errors a caller recovers from by treating the list as empty.
    #[must_use]
    pub const fn is_recoverable_read(&self) -> bool {
        matches!(self, Self::StorageRead { .. })
    }
}

/// Result type using `IdeaError`.
pub type Result<T> = std::result::Result<T, IdeaError>;
