use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A destination path that stays inside the output directory.
///
/// Invariant: never absolute and never contains a `..` component. Enforced
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check_relative(&path)?;
        Ok(Self(path))
    }

    /// Wrap a path produced by rendering a validated path template with a
    /// validated resource name.
    pub(crate) fn from_rendered(path: String) -> Self {
        let path = PathBuf::from(path);
        debug_assert!(check_relative(&path).is_ok(), "rendered path escaped: {path:?}");
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// `true` if one of the path's components equals `segment`.
    pub fn has_segment(&self, segment: &str) -> bool {
        self.0
            .components()
            .any(|c| matches!(c, Component::Normal(s) if s == segment))
    }
}

fn check_relative(path: &Path) -> Result<(), DomainError> {
    let display = || path.display().to_string();

    // `has_root` catches "/x" on Windows too, where it is not `is_absolute`.
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed { path: display() });
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(DomainError::ParentTraversalNotAllowed { path: display() });
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relative() {
        let p = RelativePath::try_new("views/widget/view.js").unwrap();
        assert_eq!(p.as_path(), Path::new("views/widget/view.js"));
        assert!(p.has_segment("widget"));
        assert!(!p.has_segment("view"));
    }

    #[test]
    fn rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(matches!(
            RelativePath::try_new("api/../../secret.js"),
            Err(DomainError::ParentTraversalNotAllowed { .. })
        ));
    }
}
