//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Build a [`Scaffolder`] from the registered templates
//! 2. Render artifacts for the resource name
//! 3. Write them to the filesystem, all-or-nothing
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{ArtifactSummary, FileExtension, GeneratedArtifact, Scaffolder, placeholders},
    error::{CrudkitError, CrudkitResult},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub path: String,
    pub placeholders: Vec<String>,
}

/// Knobs for one scaffold run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub extension: FileExtension,
    /// Overwrite destinations that already exist.
    pub force: bool,
    /// Render and check conflicts, but write nothing.
    pub dry_run: bool,
}

/// What a scaffold run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub resource: String,
    pub files: Vec<ArtifactSummary>,
    /// Destinations that existed before the run and were replaced.
    pub overwritten: Vec<String>,
    pub dry_run: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crudkit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// A scaffolder over the store's templates, in registration order.
    pub fn scaffolder(&self, extension: FileExtension) -> CrudkitResult<Scaffolder> {
        let templates = self.store.list()?;
        if templates.is_empty() {
            return Err(ApplicationError::NoTemplates.into());
        }
        Ok(Scaffolder::new(templates)?.with_extension(extension))
    }

    /// Render every artifact for `resource_name` without touching the disk.
    pub fn plan(
        &self,
        resource_name: &str,
        extension: FileExtension,
    ) -> CrudkitResult<Vec<GeneratedArtifact>> {
        Ok(self.scaffolder(extension)?.generate(resource_name)?)
    }

    /// Destinations under `output_root` that already exist.
    pub fn conflicts(&self, artifacts: &[GeneratedArtifact], output_root: &Path) -> Vec<PathBuf> {
        artifacts
            .iter()
            .map(|a| output_root.join(a.path().as_path()))
            .filter(|p| self.filesystem.exists(p))
            .collect()
    }

    /// Generate and write the artifacts for a resource.
    ///
    /// Nothing is written when the name is invalid, when a destination
    /// exists and `force` is off, or on a dry run. If a write fails midway,
    /// files written so far are removed and overwritten files restored.
    #[instrument(
        skip_all,
        fields(
            resource = %resource_name,
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        resource_name: &str,
        output_root: impl AsRef<Path>,
        options: ScaffoldOptions,
    ) -> CrudkitResult<ScaffoldReport> {
        let output_root = output_root.as_ref();

        // 1. Render
        let artifacts = self.plan(resource_name, options.extension)?;
        info!(artifacts = artifacts.len(), "Artifacts rendered");

        // 2. Conflicts
        let existing = self.conflicts(&artifacts, output_root);
        if let Some(path) = existing.first().filter(|_| !options.force) {
            return Err(ApplicationError::ArtifactExists { path: path.clone() }.into());
        }

        let report = ScaffoldReport {
            resource: resource_name.to_string(),
            files: artifacts.iter().map(|a| a.summary(output_root)).collect(),
            overwritten: existing.iter().map(|p| p.display().to_string()).collect(),
            dry_run: options.dry_run,
        };

        if options.dry_run {
            info!("Dry run, nothing written");
            return Ok(report);
        }

        // 3. Write
        self.write_artifacts(&artifacts, output_root)?;

        info!("Scaffold completed successfully");
        Ok(report)
    }

    /// List all registered templates.
    pub fn list_templates(&self) -> CrudkitResult<Vec<TemplateInfo>> {
        let templates = self.store.list()?;

        Ok(templates
            .into_iter()
            .map(|t| TemplateInfo {
                name: t.name.to_string(),
                description: t.description.to_string(),
                path: t.path.to_string(),
                placeholders: {
                    let mut vars = placeholders(t.path.as_str());
                    vars.extend(placeholders(t.body.as_str()));
                    vars.sort();
                    vars.dedup();
                    vars
                },
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all artifacts, rolling back on the first failure.
    fn write_artifacts(&self, artifacts: &[GeneratedArtifact], output_root: &Path) -> CrudkitResult<()> {
        let mut written: Vec<(PathBuf, Option<String>)> = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let path = output_root.join(artifact.path().as_path());

            let backup = match self.backup(&path) {
                Ok(backup) => backup,
                Err(e) => return Err(self.abort(&written, &path, e)),
            };

            if let Err(e) = self.write_one(&path, artifact.content()) {
                // A failed write can leave the file truncated or partial.
                if backup.is_some() || self.filesystem.exists(&path) {
                    written.push((path.clone(), backup));
                }
                return Err(self.abort(&written, &path, e));
            }

            written.push((path, backup));
        }

        info!(files = written.len(), "Successfully wrote all files");
        Ok(())
    }

    /// Current content of `path`, if it exists.
    fn backup(&self, path: &Path) -> CrudkitResult<Option<String>> {
        if self.filesystem.exists(path) {
            self.filesystem.read_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn write_one(&self, path: &Path, content: &str) -> CrudkitResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }

    fn abort(
        &self,
        written: &[(PathBuf, Option<String>)],
        path: &Path,
        error: CrudkitError,
    ) -> CrudkitError {
        warn!(path = %path.display(), error = %error, "Write failed, attempting rollback");
        self.rollback(written);
        error
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, written: &[(PathBuf, Option<String>)]) {
        for (path, backup) in written.iter().rev() {
            let result = match backup {
                Some(previous) => self.filesystem.write_file(path, previous),
                None => self.filesystem.remove_file(path),
            };

            if let Err(e) = result {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        info!(files = written.len(), "Rollback finished");
    }
}
