//! Repogen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Repogen
//! boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          repogen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, EntityDiscoverer)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: Filesystem, Reporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    repogen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, CSharpTemplates, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)         │
//! │ (ProjectLayout, composer, GenerationPlan)│
//! │        No External Dependencies          │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use repogen_core::application::{GenerationConfig, GenerationService};
//!
//! // Use the generation service (with injected adapters)
//! let service = GenerationService::new(
//!     filesystem, // impl Filesystem
//!     templates,  // impl TemplateSet
//!     reporter,   // impl Reporter
//!     GenerationConfig::default(),
//! );
//! let report = service.generate("./Shop".as_ref())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationConfig, GenerationReport, GenerationService, RunOutcome,
        ports::{Filesystem, Reporter},
    };
    pub use crate::domain::{
        ContextName, DEFAULT_CONTEXT_CLASS, EntityName, GeneratedArtifact, GenerationPlan,
        ProjectLayout, TemplateSet,
    };
    pub use crate::error::{RepogenError, RepogenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
