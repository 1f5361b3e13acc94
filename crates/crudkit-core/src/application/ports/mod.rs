//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudkit-adapters` implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: writing generated artifacts
//!   - `TemplateStore`: ordered template registry

pub mod output;

pub use output::{Filesystem, TemplateStore};
