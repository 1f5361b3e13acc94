//! crudkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudkit
//! scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudkit-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TemplateStore, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudkit-adapters (Infrastructure)    │
//! │  (InMemoryStore, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResourceName, Template, Scaffolder)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudkit_core::domain::{Scaffolder, Template};
//!
//! let api = Template::new(
//!     "api",
//!     "api/{{ resource_name }}.{{ ext }}",
//!     "// {{ resource_name }}\nexport default {}\n",
//! );
//! let scaffolder = Scaffolder::new(vec![api]).unwrap();
//!
//! let artifacts = scaffolder.generate("widget").unwrap();
//! assert_eq!(artifacts[0].path().to_string(), "api/widget.js");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldReport, ScaffoldService, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        FileExtension, GeneratedArtifact, RenderContext, ResourceName, Scaffolder, Template,
        TemplateSource,
    };
    pub use crate::error::{CrudkitError, CrudkitResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
