//! Template Service - template management operations.
//!
//! Handles registry CRUD. Separated from ScaffoldService for single
//! responsibility.

use tracing::debug;

use crate::{application::ports::TemplateStore, domain::Template, error::CrudkitResult};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> CrudkitResult<Template> {
        self.store.get(name)
    }

    /// Add or replace a template after validating it.
    pub fn save(&self, template: Template) -> CrudkitResult<()> {
        template.validate()?;
        debug!(template = %template.name, "saving template");
        self.store.insert(template)
    }

    /// Remove a template.
    pub fn remove(&self, name: &str) -> CrudkitResult<()> {
        self.store.remove(name)
    }

    /// List all templates, in registration order.
    pub fn list(&self) -> CrudkitResult<Vec<Template>> {
        self.store.list()
    }
}
