//! Application services - orchestrate use cases.

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{ScaffoldOptions, ScaffoldReport, ScaffoldService, TemplateInfo};
pub use template_service::TemplateService;
