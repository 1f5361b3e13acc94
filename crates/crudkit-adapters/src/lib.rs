//! Infrastructure adapters for crudkit.
//!
//! This crate implements the ports defined in `crudkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::{FilesystemTemplateLoader, TemplateLoadError};
pub use template_store::InMemoryStore;
