pub mod artifact;
pub mod common;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::{ArtifactSummary, GeneratedArtifact};
pub use common::RelativePath;
pub use template::{RenderContext, Template, TemplateSource};
