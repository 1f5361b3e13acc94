// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudkit.
//!
//! This module contains pure scaffolding logic with no I/O. Writing files
//! and storing templates are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable outputs**: generated artifacts are never mutated
pub mod entities;
pub mod error;
pub mod scaffolder;
pub mod value_objects;

mod validation;

pub use entities::{
    artifact::{ArtifactSummary, GeneratedArtifact},
    common::RelativePath,
    template::{
        KNOWN_VARIABLES, RenderContext, Template, TemplateSource, VAR_EXT, VAR_RESOURCE_IDENT,
        VAR_RESOURCE_NAME, placeholders,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use scaffolder::Scaffolder;
pub use validation::DomainValidator;
pub use value_objects::{FileExtension, MAX_RESOURCE_NAME_LEN, ResourceName};

#[cfg(test)]
mod tests {
    use super::*;

    fn crud_templates() -> Vec<Template> {
        vec![
            Template::new(
                "api",
                "api/{{ resource_name }}.{{ ext }}",
                "// API descriptor for the '{{ resource_name }}' resource.\n\
                 export default new Api(request, {\n  list: '/api/list',\n  one: '/api/one'\n})\n",
            ),
            Template::new(
                "view",
                "views/{{ resource_name }}/view.{{ ext }}",
                "import {{ resource_ident }} from '../../api/{{ resource_name }}'\n\
                 export default ViewFactory({\n  data: new CollectionDescriptor('{{ resource_name }}')\n})\n",
            ),
        ]
    }

    // ========================================================================
    // End-to-end domain flow
    // ========================================================================

    #[test]
    fn widget_scaffold() {
        let artifacts = Scaffolder::new(crud_templates())
            .unwrap()
            .generate("widget")
            .unwrap();

        assert_eq!(artifacts.len(), 2);
        assert!(artifacts[0].content().contains("'widget' resource"));
        assert!(artifacts[1]
            .content()
            .contains("data: new CollectionDescriptor('widget')"));
    }

    #[test]
    fn hyphenated_names_keep_path_segment() {
        let artifacts = Scaffolder::new(crud_templates())
            .unwrap()
            .generate("order-item")
            .unwrap();

        assert!(artifacts.iter().any(|a| a.path().has_segment("order-item")));
        assert_eq!(artifacts[0].path().to_string(), "api/order-item.js");
    }

    #[test]
    fn validator_delegates() {
        assert!(DomainValidator::validate_resource_name("widget").is_ok());
        assert!(DomainValidator::validate_resource_name("").is_err());
        for template in crud_templates() {
            assert!(DomainValidator::validate_template(&template).is_ok());
        }
    }

    #[test]
    fn summary_joins_output_root() {
        let artifacts = Scaffolder::new(crud_templates())
            .unwrap()
            .generate("widget")
            .unwrap();
        let summary = artifacts[0].summary(std::path::Path::new("src"));

        assert_eq!(summary.template, "api");
        assert_eq!(summary.path, std::path::Path::new("src/api/widget.js").display().to_string());
        assert_eq!(summary.bytes, artifacts[0].size());
    }
}
