//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudkit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Template;
use crate::error::CrudkitResult;

/// Port for writing generated artifacts.
///
/// Implemented by:
/// - `crudkit_adapters::filesystem::LocalFilesystem` (production)
/// - `crudkit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudkitResult<()>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> CrudkitResult<()>;

    /// Read a file's content. Used to back up files before overwriting.
    fn read_file(&self, path: &Path) -> CrudkitResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> CrudkitResult<()>;
}

/// Port for the template registry.
///
/// Order matters: [`TemplateStore::list`] returns templates in registration
/// order, which is the order artifacts are generated and written in.
///
/// Implemented by:
/// - `crudkit_adapters::template_store::InMemoryStore`
pub trait TemplateStore: Send + Sync {
    /// All templates, in registration order.
    fn list(&self) -> CrudkitResult<Vec<Template>>;

    /// Get a template by name.
    fn get(&self, name: &str) -> CrudkitResult<Template>;

    /// Register a template, replacing one with the same name in place.
    fn insert(&self, template: Template) -> CrudkitResult<()>;

    /// Remove a template by name.
    fn remove(&self, name: &str) -> CrudkitResult<()>;
}
