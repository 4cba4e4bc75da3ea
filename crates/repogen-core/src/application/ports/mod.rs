//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation engine needs from external
//! systems. The `repogen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::RepogenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `repogen_adapters::filesystem::LocalFilesystem` (production)
/// - `repogen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Reads and writes go through the same port so a single in-memory double
///   covers the whole pipeline in tests.
/// - The existence check and the write are separate calls; the narrow race
///   between them is acceptable for an interactive, single-operator tool.
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RepogenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()>;

    /// List the files (not subdirectories) directly inside a directory.
    /// Order is filesystem-reported; callers sort for determinism.
    fn list_files(&self, dir: &Path) -> RepogenResult<Vec<PathBuf>>;
}

/// Port for user-facing progress and warning events.
///
/// The core never owns a global logger; it emits events through this
/// observer and lets the driving side decide how to render them. The CLI
/// backs it with its output manager, tests with [`NullReporter`].
pub trait Reporter: Send + Sync {
    /// Informational event (file created, run finished).
    fn info(&self, message: &str);

    /// Warning event (missing directory, ambiguous context).
    fn warn(&self, message: &str);
}

/// Reporter that discards everything. Useful default for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
