use std::path::Path;

use serde::Serialize;

use crate::domain::entities::common::RelativePath;

/// Rendered output of one template for one resource.
///
/// Terminal value: created by the scaffolder, handed to the file-emission
/// collaborator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    template: String,
    path: RelativePath,
    content: String,
}

impl GeneratedArtifact {
    pub(crate) fn new(template: impl Into<String>, path: RelativePath, content: String) -> Self {
        Self {
            template: template.into(),
            path,
            content,
        }
    }

    /// Name of the template this artifact was rendered from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Destination relative to the output directory.
    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Summary used by machine-readable CLI output.
    pub fn summary(&self, output_root: &Path) -> ArtifactSummary {
        ArtifactSummary {
            template: self.template.clone(),
            path: output_root.join(self.path.as_path()).display().to_string(),
            bytes: self.size(),
        }
    }
}

/// Serializable view of a [`GeneratedArtifact`] without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub template: String,
    pub path: String,
    pub bytes: usize,
}
