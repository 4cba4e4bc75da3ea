//! Application services.

pub mod discovery;
pub mod emitter;
pub mod generation_service;

pub use discovery::EntityDiscoverer;
pub use emitter::{FileEmitter, WriteOutcome};
pub use generation_service::{GenerationConfig, GenerationReport, GenerationService, RunOutcome};
