//! In-memory template store with built-in templates.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crudkit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Template},
    error::CrudkitResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Templates keep their registration order; that order is the order
/// artifacts are generated in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Vec<Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> CrudkitResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> CrudkitResult<()> {
        for template in builtin_templates::all_templates() {
            self.insert(template)?;
        }

        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl TemplateStore for InMemoryStore {
    fn list(&self) -> CrudkitResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.clone())
    }

    fn get(&self, name: &str) -> CrudkitResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.iter().find(|t| t.name == name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn insert(&self, template: Template) -> CrudkitResult<()> {
        // Validate before insertion
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        match inner.iter_mut().find(|t| t.name == template.name) {
            Some(slot) => {
                debug!(template = %template.name, "replacing template");
                *slot = template;
            }
            None => {
                debug!(template = %template.name, "registering template");
                inner.push(template);
            }
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let before = inner.len();
        inner.retain(|t| t.name != name);
        if inner.len() == before {
            return Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
