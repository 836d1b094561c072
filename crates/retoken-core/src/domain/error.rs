// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they carry no I/O handles)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid token {side}: {reason}")]
    InvalidDelimiter { side: &'static str, reason: String },

    #[error("Invalid placeholder pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDelimiter { side, .. } => vec![
                format!("Provide a non-empty token {}", side),
                "Example: --prefix '#{' --suffix '}#'".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("Generated pattern: {}", pattern),
                "This is likely a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDelimiter { .. } => ErrorCategory::Validation,
            Self::InvalidPattern { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
