use crate::domain::{entities::Template, error::DomainError, value_objects::ResourceName};

/// Centralized domain validation.
///
/// Adapters and the CLI call through here instead of reaching into entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_resource_name(raw: &str) -> Result<ResourceName, DomainError> {
        ResourceName::parse(raw)
    }

    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }
}
