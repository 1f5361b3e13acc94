//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O. Name and
//! template errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A destination file is already present and overwriting was not allowed.
    #[error("File already exists at {path}")]
    ArtifactExists { path: PathBuf },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,

    /// No template registered under this name.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// The store holds no templates at all.
    #[error("No templates are registered")]
    NoTemplates,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the output directory is on a writable filesystem".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("'{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or pick another output directory with --output".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::TemplateNotFound { .. } => {
                vec!["Try: crudkit list to see available templates".into()]
            }
            Self::NoTemplates => vec![
                "No templates were loaded".into(),
                "Check templates.local_path in your configuration".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::ArtifactExists { .. } => ErrorCategory::Conflict,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::NoTemplates => ErrorCategory::Configuration,
        }
    }
}
