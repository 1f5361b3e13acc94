//! Filesystem-based template loader.
//!
//! Discovers and parses `*.toml` manifests from a directory, converting them
//! into domain [`Template`] objects. Loaded templates are registered on top
//! of the built-ins, so a manifest named `view` replaces the built-in view.
//!
//! # Directory layout expected
//!
//! ```text
//! .crudkit/templates/
//! ├── api.toml               ← manifest with an inline body
//! ├── view.toml              ← manifest pointing at view.js.tmpl
//! └── view.js.tmpl           ← body file, not a manifest
//! ```
//!
//! # Manifest format
//!
//! ```toml
//! [template]
//! name        = "view"
//! description = "Custom view"                         # optional
//! path        = "views/{{ resource_name }}/index.{{ ext }}"
//! # exactly one of:
//! body        = "export default {}"
//! body_file   = "view.js.tmpl"                        # relative to the manifest
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crudkit_core::{
    domain::{DomainError, Template},
    error::CrudkitError,
};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a templates directory or a single manifest could not be loaded.
#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("templates directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest '{}' must set exactly one of `body` or `body_file`", path.display())]
    Body { path: PathBuf },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl From<TemplateLoadError> for CrudkitError {
    fn from(e: TemplateLoadError) -> Self {
        match e {
            TemplateLoadError::Invalid(domain) => CrudkitError::Domain(domain),
            other => CrudkitError::Configuration {
                message: other.to_string(),
            },
        }
    }
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a template manifest.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateManifest {
    pub template: TemplateSection,
}

/// `[template]` section.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateSection {
    /// Registry name; reusing `api` or `view` overrides a built-in.
    pub name: String,
    pub description: Option<String>,
    /// Destination path template, relative to the output directory.
    pub path: String,
    pub body: Option<String>,
    /// Body file, resolved relative to the manifest.
    pub body_file: Option<PathBuf>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`Template`] objects from the `*.toml` manifests in one directory.
///
/// Manifests are read in file-name order. A manifest that is unreadable,
/// malformed or describes an invalid template emits a `WARN` log and is
/// skipped; it does not prevent other templates from loading.
///
/// # Example
///
/// ```no_run
/// use crudkit_adapters::FilesystemTemplateLoader;
///
/// let loader = FilesystemTemplateLoader::new(".crudkit/templates");
/// let templates = loader.load_all()?;
/// println!("Loaded {} templates", templates.len());
/// # Ok::<(), crudkit_adapters::TemplateLoadError>(())
/// ```
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; [`Self::load_all`] reports
    /// it if it is missing when called.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Load every valid template found in the directory.
    ///
    /// # Errors
    ///
    /// [`TemplateLoadError::DirectoryNotFound`] if the directory is missing,
    /// [`TemplateLoadError::Walk`] if it cannot be listed.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<Template>, TemplateLoadError> {
        if !self.templates_dir.is_dir() {
            return Err(TemplateLoadError::DirectoryNotFound {
                path: self.templates_dir.clone(),
            });
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| TemplateLoadError::Walk {
                path: self.templates_dir.clone(),
                source,
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_manifest(path) {
                continue;
            }

            match load_manifest(path) {
                Ok(template) => {
                    debug!(template = %template.name, "loaded template");
                    templates.push(template);
                }
                Err(e) => {
                    // One bad manifest must not block all others.
                    warn!(
                        manifest = %path.display(),
                        error = %e,
                        "skipping template manifest due to load error"
                    );
                }
            }
        }

        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }
}

/// Load a single manifest into a validated [`Template`].
pub fn load_manifest(manifest_path: &Path) -> Result<Template, TemplateLoadError> {
    let raw = read(manifest_path)?;
    let manifest: TemplateManifest =
        toml::from_str(&raw).map_err(|source| TemplateLoadError::Parse {
            path: manifest_path.to_path_buf(),
            source,
        })?;
    let section = manifest.template;

    let body = match (section.body, section.body_file) {
        (Some(body), None) => body,
        (None, Some(file)) => {
            let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
            read(&base.join(file))?
        }
        _ => {
            return Err(TemplateLoadError::Body {
                path: manifest_path.to_path_buf(),
            });
        }
    };

    let template = Template::new(section.name, section.path, body)
        .with_description(section.description.unwrap_or_default());
    template.validate()?;

    Ok(template)
}

fn is_manifest(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn read(path: &Path) -> Result<String, TemplateLoadError> {
    fs::read_to_string(path).map_err(|source| TemplateLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    const INLINE: &str = r#"
[template]
name = "store"
description = "Vuex-style store module"
path = "store/{{ resource_name }}.{{ ext }}"
body = "export const {{ resource_ident }}Store = {}\n"
"#;

    #[test]
    fn loads_inline_body() {
        let root = TempDir::new().unwrap();
        write(root.path(), "store.toml", INLINE);

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "store");
        assert_eq!(templates[0].description, "Vuex-style store module");
        assert_eq!(templates[0].path.as_str(), "store/{{ resource_name }}.{{ ext }}");
    }

    #[test]
    fn loads_body_file_relative_to_manifest() {
        let root = TempDir::new().unwrap();
        write(
            root.path(),
            "view.toml",
            "[template]\nname = \"view\"\npath = \"views/{{ resource_name }}/index.{{ ext }}\"\nbody_file = \"view.js.tmpl\"\n",
        );
        write(root.path(), "view.js.tmpl", "// custom {{ resource_name }} view\n");

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].body.as_str(), "// custom {{ resource_name }} view\n");
        assert!(templates[0].description.is_empty());
    }

    #[test]
    fn sorted_by_file_name() {
        let root = TempDir::new().unwrap();
        write(root.path(), "b.toml", &INLINE.replace("store", "b"));
        write(root.path(), "a.toml", &INLINE.replace("store", "a"));

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        let names: Vec<&str> = templates.iter().map(|t| &*t.name).collect();

        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn skips_invalid_manifests() {
        let root = TempDir::new().unwrap();
        write(root.path(), "good.toml", INLINE);
        write(root.path(), "broken.toml", "[template\nname = ");
        write(
            root.path(),
            "unknown.toml",
            "[template]\nname = \"x\"\npath = \"x/{{ resource_name }}.js\"\nbody = \"{{ model }}\"\n",
        );
        write(
            root.path(),
            "both.toml",
            "[template]\nname = \"y\"\npath = \"y/{{ resource_name }}.js\"\nbody = \"a\"\nbody_file = \"a.tmpl\"\n",
        );
        write(root.path(), "notes.txt", "not a manifest");

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "store");
    }

    #[test]
    fn ignores_nested_directories() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write(&nested, "store.toml", INLINE);

        let templates = FilesystemTemplateLoader::new(root.path()).load_all().unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = FilesystemTemplateLoader::new(root.path().join("missing"))
            .load_all()
            .unwrap_err();

        assert!(matches!(err, TemplateLoadError::DirectoryNotFound { .. }));
        assert!(matches!(
            CrudkitError::from(err),
            CrudkitError::Configuration { .. }
        ));
    }

    #[test]
    fn manifest_errors_are_specific() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("none.toml");
        fs::write(&path, "[template]\nname = \"z\"\npath = \"z/{{ resource_name }}.js\"\n").unwrap();

        assert!(matches!(load_manifest(&path), Err(TemplateLoadError::Body { .. })));

        fs::write(&path, "[template]\nname = \"z\"\npath = \"z.js\"\nbody = \"x\"\n").unwrap();
        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Invalid(DomainError::InvalidTemplate { .. })));
    }
}
