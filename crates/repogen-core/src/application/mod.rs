//! Application layer for Repogen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, discovery,
//!   emission)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All convention rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EntityDiscoverer, FileEmitter, GenerationConfig, GenerationReport, GenerationService,
    RunOutcome, WriteOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NullReporter, Reporter};

pub use error::ApplicationError;
