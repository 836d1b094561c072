//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not token
//! logic. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while gathering tokens or rewriting files.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (anything but "not found" on a target).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A token source could not be located.
    #[error("Token source '{source_name}' not found")]
    TokenSourceNotFound { source_name: String },

    /// A token source was found but could not be read or parsed.
    #[error("Failed to load tokens from '{source_name}': {reason}")]
    TokenSourceFailed { source_name: String, reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::TokenSourceNotFound { source_name } => vec![
                format!("Token source not found: {}", source_name),
                "Check the --token-value-files paths".into(),
            ],
            Self::TokenSourceFailed { source_name, .. } => vec![
                format!("Could not load tokens from: {}", source_name),
                "Token files must hold a JSON array of {\"key\", \"value\"} objects".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TokenSourceNotFound { .. } => ErrorCategory::NotFound,
            Self::TokenSourceFailed { .. } => ErrorCategory::Source,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
