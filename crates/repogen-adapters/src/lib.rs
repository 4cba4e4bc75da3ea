//! Infrastructure adapters for Repogen.
//!
//! This crate implements the ports defined in
//! `repogen-core::application::ports` and `repogen-core::domain::templates`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod reporter;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::TracingReporter;
pub use templates::CSharpTemplates;
