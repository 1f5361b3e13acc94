//! Value objects: the validated resource name and the output file extension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Longest resource name accepted. Names end up as file and directory names.
pub const MAX_RESOURCE_NAME_LEN: usize = 64;

/// Words that cannot be used as an import binding in an ES module.
const JS_RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export", "extends",
    "false", "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
];

/// Appended to identifiers that would otherwise be reserved words.
const RESERVED_SUFFIX: &str = "Api";

// ============================================================================
// ResourceName
// ============================================================================

/// The named entity a CRUD view is scaffolded for, e.g. `widget`.
///
/// Invariant: non-empty, at most [`MAX_RESOURCE_NAME_LEN`] bytes, starts with
/// an ASCII letter, and contains only ASCII letters, digits, `_` and `-`.
/// That makes it safe both as a substitution value and as a single path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate `raw` as a resource name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidName {
            name: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("name cannot be empty".into()));
        }
        if raw.contains("..") {
            return Err(invalid("name cannot contain '..'".into()));
        }
        if let Some(sep) = raw.chars().find(|c| matches!(c, '/' | '\\')) {
            return Err(invalid(format!("name cannot contain path separator '{sep}'")));
        }
        if raw.len() > MAX_RESOURCE_NAME_LEN {
            return Err(invalid(format!(
                "name is longer than {MAX_RESOURCE_NAME_LEN} characters"
            )));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(invalid(format!("character {bad:?} is not allowed")));
        }
        if !raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(invalid("name must start with a letter".into()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// lowerCamelCase JavaScript identifier for the name.
    ///
    /// Hyphens are word boundaries (`order-item` → `orderItem`); underscores
    /// are already legal in identifiers and are kept. Reserved words get an
    /// `Api` suffix (`delete` → `deleteApi`).
    pub fn to_identifier(&self) -> String {
        let mut ident = String::with_capacity(self.0.len());
        for (i, word) in self.0.split('-').filter(|w| !w.is_empty()).enumerate() {
            if i == 0 {
                ident.push_str(word);
                continue;
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                ident.push(first.to_ascii_uppercase());
                ident.push_str(chars.as_str());
            }
        }
        if JS_RESERVED.contains(&ident.as_str()) {
            ident.push_str(RESERVED_SUFFIX);
        }
        ident
    }
}

impl FromStr for ResourceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// FileExtension
// ============================================================================

/// Extension of the generated source files.
///
/// The emitted fragments are valid in both JavaScript and TypeScript host
/// projects, so this only affects destination paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    #[default]
    Js,
    Ts,
}

impl FileExtension {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

impl FromStr for FileExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Self::Js),
            "ts" | "typescript" => Ok(Self::Ts),
            other => Err(format!("unsupported file extension '{other}' (expected js or ts)")),
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
