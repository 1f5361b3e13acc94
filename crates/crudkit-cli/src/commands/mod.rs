//! Command handlers, one module per subcommand.

use std::path::Path;

use tracing::{debug, info};

use crudkit_adapters::{FilesystemTemplateLoader, InMemoryStore};
use crudkit_core::application::TemplateService;

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

/// Built-in templates, with manifests from `templates_dir` layered on top.
///
/// A manifest reusing a built-in name replaces it in place; new names are
/// appended and generated after the built-ins.
pub fn build_store(templates_dir: Option<&Path>) -> CliResult<InMemoryStore> {
    let store = InMemoryStore::with_builtin()?;

    if let Some(dir) = templates_dir {
        let loaded = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(dir = %dir.display(), count = loaded.len(), "Loaded custom templates");

        // The service shares the store's state, so saves land in `store`.
        let templates = TemplateService::new(Box::new(store.clone()));
        for template in loaded {
            debug!(template = %template.name, "Registering custom template");
            templates.save(template)?;
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudkit_core::application::ports::TemplateStore;
    use tempfile::TempDir;

    #[test]
    fn builtins_without_directory() {
        let store = build_store(None).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn manifests_override_and_extend() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("view.toml"),
            "[template]\nname = \"view\"\npath = \"pages/{{ resource_name }}.{{ ext }}\"\nbody = \"// {{ resource_name }}\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("store.toml"),
            "[template]\nname = \"store\"\npath = \"store/{{ resource_name }}.{{ ext }}\"\nbody = \"// store\"\n",
        )
        .unwrap();

        let store = build_store(Some(dir.path())).unwrap();
        let templates = store.list().unwrap();
        let names: Vec<&str> = templates.iter().map(|t| &*t.name).collect();

        assert_eq!(names, ["api", "view", "store"]);
        assert_eq!(templates[1].path.as_str(), "pages/{{ resource_name }}.{{ ext }}");
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = build_store(Some(&dir.path().join("missing"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
