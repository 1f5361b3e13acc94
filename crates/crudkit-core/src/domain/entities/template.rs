//! Template entities and variable substitution.
//!
//! ## Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Template                                                 │
//! │  ├── name         "api" | "view" | user-defined          │
//! │  ├── path         "api/{{ resource_name }}.{{ ext }}"    │
//! │  └── body         text with {{ ... }} placeholders        │
//! ├───────────────────────────────────────────────────────────┤
//! │  RenderContext                                            │
//! │  └── {{ resource_name }} -> "order-item"                  │
//! │      {{ resource_ident }} -> "orderItem"                  │
//! │      {{ ext }} -> "js"                                    │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Placeholders are double-brace tokens. Whitespace inside the braces is
//! ignored, so `{{resource_name}}` and `{{ resource_name }}` are the same
//! token. Substitution is a single left-to-right pass; substituted values
//! are never rescanned.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{FileExtension, ResourceName},
};

/// Opening delimiter of a placeholder token.
pub const OPEN: &str = "{{";
/// Closing delimiter of a placeholder token.
pub const CLOSE: &str = "}}";

/// The resource name, verbatim.
pub const VAR_RESOURCE_NAME: &str = "resource_name";
/// The resource name as a lowerCamelCase identifier.
pub const VAR_RESOURCE_IDENT: &str = "resource_ident";
/// The generated file extension without the dot.
pub const VAR_EXT: &str = "ext";

/// Every variable a [`RenderContext`] defines.
pub const KNOWN_VARIABLES: &[&str] = &[VAR_RESOURCE_NAME, VAR_RESOURCE_IDENT, VAR_EXT];

// ============================================================================
// TemplateSource
// ============================================================================

/// Template text, either compiled into the binary or loaded at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string; built-in templates.
    Static(&'static str),
    /// Runtime string; templates loaded from disk.
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Template
// ============================================================================

/// One scaffolded file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    /// Destination path relative to the output directory, with placeholders.
    pub path: TemplateSource,
    /// File body with placeholders.
    pub body: TemplateSource,
}

impl Template {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        path: impl Into<TemplateSource>,
        body: impl Into<TemplateSource>,
    ) -> Self {
        Self {
            name: name.into(),
            description: Cow::Borrowed(""),
            path: path.into(),
            body: body.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the template can be rendered for any valid resource name.
    ///
    /// - name and body are non-empty
    /// - the path template references `resource_name` and stays relative
    /// - path and body only use [`KNOWN_VARIABLES`]
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTemplate {
            template: self.name.to_string(),
            reason: reason.into(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("template name is empty"));
        }
        if self.body.as_str().trim().is_empty() {
            return Err(invalid("template body is empty"));
        }

        for text in [self.path.as_str(), self.body.as_str()] {
            if let Some(placeholder) = placeholders(text)
                .into_iter()
                .find(|p| !KNOWN_VARIABLES.contains(&p.as_str()))
            {
                return Err(DomainError::UnknownPlaceholder {
                    template: self.name.to_string(),
                    placeholder,
                });
            }
        }

        let path_vars = placeholders(self.path.as_str());
        if !path_vars.iter().any(|p| p == VAR_RESOURCE_NAME) {
            return Err(invalid(
                "path must contain {{ resource_name }} so each resource gets its own file",
            ));
        }

        // Substitution values are identifier-safe, so checking the raw path
        // template is enough to keep every rendered path relative.
        RelativePath::try_new(self.path.as_str())?;

        Ok(())
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// Values substituted into templates for one resource.
///
/// A **Value Object**: built once per generation, then only read.
///
/// | Variable         | `order-item` | Source      |
/// |------------------|--------------|-------------|
/// | `resource_name`  | `order-item` | user input  |
/// | `resource_ident` | `orderItem`  | computed    |
/// | `ext`            | `js`         | option      |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(name: &ResourceName, extension: FileExtension) -> Self {
        let mut variables = HashMap::with_capacity(KNOWN_VARIABLES.len());
        variables.insert(VAR_RESOURCE_NAME, name.as_str().to_string());
        variables.insert(VAR_RESOURCE_IDENT, name.to_identifier());
        variables.insert(VAR_EXT, extension.as_str().to_string());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known placeholder in `text`.
    ///
    /// Unknown placeholders and unterminated `{{` are copied through
    /// unchanged.
    pub fn render(&self, text: &str) -> String {
        rewrite_tokens(text, |name, out| match self.get(name) {
            Some(value) => {
                out.push_str(value);
                true
            }
            None => false,
        })
    }
}

/// `text` with every placeholder spelled `{{ name }}`.
///
/// Two path templates render to the same file for every resource exactly
/// when their canonical forms are equal.
pub fn canonical_placeholders(text: &str) -> String {
    rewrite_tokens(text, |name, out| {
        out.push_str(OPEN);
        out.push(' ');
        out.push_str(name);
        out.push(' ');
        out.push_str(CLOSE);
        true
    })
}

/// Single left-to-right pass over `text`. `write` receives each trimmed
/// placeholder name and returns `false` to keep the token verbatim.
fn rewrite_tokens(text: &str, mut write: impl FnMut(&str, &mut String) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        let Some(end) = after.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        if !write(after[..end].trim(), &mut out) {
            out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
        }
        rest = &after[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// Names of all placeholder tokens in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            break;
        };
        names.push(after[..end].trim().to_string());
        rest = &after[end + CLOSE.len()..];
    }

    names
}
