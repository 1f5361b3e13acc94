//! Application layer for crudkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! substitution logic itself. That lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ScaffoldOptions, ScaffoldReport, ScaffoldService, TemplateInfo, TemplateService,
};

pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
