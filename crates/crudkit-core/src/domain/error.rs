// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports can be kept after the failing call)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// The only way [`crate::domain::Scaffolder::generate`] can fail.
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Template Errors (raised at registration, never at generation)
    // ========================================================================
    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Template '{template}' references unknown placeholder '{{{{ {placeholder} }}}}'")]
    UnknownPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the output directory: {path}")]
    ParentTraversalNotAllowed { path: String },

    #[error("Template '{name}' is registered twice")]
    DuplicateTemplate { name: String },

    #[error("Templates '{first}' and '{second}' write to the same destination {path}")]
    DuplicateDestination {
        first: String,
        second: String,
        path: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Resource name '{name}' is invalid: {reason}"),
                "Use ASCII letters, digits, hyphens, and underscores".into(),
                "Start with a letter".into(),
                "Examples: widget, order-item, user_profile".into(),
            ],
            Self::UnknownPlaceholder { placeholder, .. } => vec![
                format!("'{placeholder}' is not a known variable"),
                "Available: resource_name, resource_ident, ext".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::ParentTraversalNotAllowed { .. } => vec![
                "Template paths must be relative to the output directory".into(),
                "Example: views/{{ resource_name }}/view.{{ ext }}".into(),
            ],
            Self::DuplicateTemplate { name } => vec![
                format!("Rename one of the templates called '{name}'"),
            ],
            _ => vec!["Check the template definition and try again".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
