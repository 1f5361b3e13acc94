//! The scaffolder: resource name in, rendered artifacts out.
//!
//! Pure and synchronous. Templates are checked once in [`Scaffolder::new`],
//! so [`Scaffolder::generate`] has a single failure mode: an invalid
//! resource name.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        artifact::GeneratedArtifact,
        common::RelativePath,
        template::{RenderContext, Template, canonical_placeholders},
    },
    error::DomainError,
    value_objects::{FileExtension, ResourceName},
};

/// Renders a fixed, ordered list of templates for a resource.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    templates: Vec<Template>,
    extension: FileExtension,
}

impl Scaffolder {
    /// Build a scaffolder over `templates`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Any template that fails [`Template::validate`], two templates sharing
    /// a name, or two path templates that differ only in placeholder spacing.
    pub fn new(templates: Vec<Template>) -> Result<Self, DomainError> {
        {
            let mut names: HashSet<&str> = HashSet::with_capacity(templates.len());
            let mut paths: HashMap<String, &str> = HashMap::with_capacity(templates.len());

            for template in &templates {
                template.validate()?;

                if !names.insert(&template.name) {
                    return Err(DomainError::DuplicateTemplate {
                        name: template.name.to_string(),
                    });
                }
                let destination = canonical_placeholders(template.path.as_str());
                if let Some(first) = paths.insert(destination, &template.name) {
                    return Err(DomainError::DuplicateDestination {
                        first: first.to_string(),
                        second: template.name.to_string(),
                        path: template.path.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            templates,
            extension: FileExtension::default(),
        })
    }

    pub fn with_extension(mut self, extension: FileExtension) -> Self {
        self.extension = extension;
        self
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    /// Render every template for `resource_name`.
    ///
    /// Returns one artifact per template, in registration order. Either all
    /// artifacts are produced or none are.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidName`] if `resource_name` is not identifier-safe.
    #[instrument(skip(self), fields(templates = self.templates.len()))]
    pub fn generate(&self, resource_name: &str) -> Result<Vec<GeneratedArtifact>, DomainError> {
        let name = ResourceName::parse(resource_name)?;
        Ok(self.generate_for(&name))
    }

    /// Render every template for an already validated name.
    pub fn generate_for(&self, name: &ResourceName) -> Vec<GeneratedArtifact> {
        let ctx = RenderContext::new(name, self.extension);

        self.templates
            .iter()
            .map(|template| {
                let path = RelativePath::from_rendered(ctx.render(template.path.as_str()));
                let content = ctx.render(template.body.as_str());
                debug!(template = %template.name, path = %path, bytes = content.len(), "rendered");
                GeneratedArtifact::new(template.name.to_string(), path, content)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::template::{OPEN, placeholders};

    fn sample() -> Scaffolder {
        Scaffolder::new(vec![
            Template::new(
                "api",
                "api/{{ resource_name }}.{{ ext }}",
                "// {{ resource_name }}\nexport default { list: '/api/list' }\n",
            ),
            Template::new(
                "view",
                "views/{{ resource_name }}/view.{{ ext }}",
                "import {{ resource_ident }} from '../../api/{{ resource_name }}'\nnew X('{{resource_name}}')\n",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn one_artifact_per_template_in_order() {
        let artifacts = sample().generate("widget").unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.template()).collect();
        assert_eq!(names, ["api", "view"]);
        assert_eq!(artifacts[0].path().to_string(), "api/widget.js");
        assert_eq!(artifacts[1].path().to_string(), "views/widget/view.js");
    }

    #[test]
    fn no_placeholder_survives() {
        for name in ["widget", "order-item", "user_profile", "X"] {
            for artifact in sample().generate(name).unwrap() {
                assert!(!artifact.content().contains(OPEN), "{name}: {}", artifact.content());
                assert!(placeholders(&artifact.path().to_string()).is_empty());
            }
        }
    }

    #[test]
    fn substitution_is_consistent() {
        let artifacts = sample().generate("order-item").unwrap();
        let view = artifacts[1].content();
        assert!(view.contains("import orderItem from '../../api/order-item'"));
        assert!(view.contains("new X('order-item')"));
        assert!(artifacts[1].path().has_segment("order-item"));
    }

    #[test]
    fn reserved_word_resource_gets_valid_binding() {
        let artifacts = sample().generate("delete").unwrap();
        assert!(artifacts[1]
            .content()
            .contains("import deleteApi from '../../api/delete'"));
        assert_eq!(artifacts[0].path().to_string(), "api/delete.js");
    }

    #[test]
    fn generation_is_idempotent() {
        let scaffolder = sample();
        assert_eq!(
            scaffolder.generate("widget").unwrap(),
            scaffolder.generate("widget").unwrap()
        );
    }

    #[test]
    fn invalid_names_produce_nothing() {
        for bad in ["", "a/b", "..", "../widget"] {
            assert!(matches!(
                sample().generate(bad),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn extension_changes_paths_only() {
        let js = sample().generate("widget").unwrap();
        let ts = sample()
            .with_extension(FileExtension::Ts)
            .generate("widget")
            .unwrap();
        assert_eq!(ts[0].path().to_string(), "api/widget.ts");
        assert_eq!(js[0].content(), ts[0].content());
    }

    #[test]
    fn rejects_duplicate_templates() {
        let t = Template::new("api", "api/{{ resource_name }}.js", "x");
        assert!(matches!(
            Scaffolder::new(vec![t.clone(), t.clone()]),
            Err(DomainError::DuplicateTemplate { .. })
        ));

        let mut other = t.clone();
        other.name = "other".into();
        assert!(matches!(
            Scaffolder::new(vec![t, other]),
            Err(DomainError::DuplicateDestination { .. })
        ));
    }

    #[test]
    fn spacing_does_not_hide_duplicate_destinations() {
        let spaced = Template::new("api", "api/{{ resource_name }}.{{ ext }}", "x");
        let tight = Template::new("api-copy", "api/{{resource_name}}.{{ext}}", "y");

        match Scaffolder::new(vec![spaced, tight]) {
            Err(DomainError::DuplicateDestination { first, second, .. }) => {
                assert_eq!(first, "api");
                assert_eq!(second, "api-copy");
            }
            other => panic!("expected duplicate destination, got {other:?}"),
        }
    }

    #[test]
    fn empty_registry_generates_nothing() {
        let scaffolder = Scaffolder::new(Vec::new()).unwrap();
        assert!(scaffolder.generate("widget").unwrap().is_empty());
    }
}
