//! Domain layer for Repogen.
//!
//! Pure business logic: project layout conventions, identifier rules, and
//! template composition. Nothing in this module performs I/O; filesystem
//! access lives behind the ports in `crate::application::ports`.

pub mod composer;
pub mod error;
pub mod identifiers;
pub mod layout;
pub mod plan;
pub mod templates;

pub use composer::{compose_entity_pair, compose_generic_repository, compose_unit_of_work};
pub use error::{DomainError, ErrorCategory};
pub use identifiers::{ContextName, DEFAULT_CONTEXT_CLASS, EntityName};
pub use layout::ProjectLayout;
pub use plan::{GeneratedArtifact, GenerationPlan};
pub use templates::TemplateSet;
