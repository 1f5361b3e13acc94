//! Unified error handling for crudkit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for crudkit Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CrudkitError {
    /// Errors from the domain layer (invalid names, malformed templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store and filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CrudkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in crudkit".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the error was caused by the resource name the user typed.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidName { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Template,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CrudkitResult<T> = Result<T, CrudkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_name_is_validation() {
        let err: CrudkitError = DomainError::InvalidName {
            name: "a/b".into(),
            reason: "contains '/'".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_invalid_name());
        assert!(err.to_string().contains("Invalid resource name"));
    }

    #[test]
    fn existing_artifact_is_conflict() {
        let err: CrudkitError = ApplicationError::ArtifactExists {
            path: PathBuf::from("src/api/widget.js"),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(!err.is_invalid_name());
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }
}
