//! File emission.
//!
//! The single point through which generated artifacts reach disk. Two rules:
//! existing files are never overwritten (so reruns only fill gaps and manual
//! edits survive), and dry-run mode reports intent without touching the
//! filesystem.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::{Filesystem, Reporter},
    error::RepogenResult,
};

/// What happened to one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was created with the given content.
    Written,
    /// File already existed; content untouched.
    SkippedExisting,
    /// Dry-run mode; nothing touched.
    DryRun,
}

/// Idempotent, optionally dry-run file writer.
pub struct FileEmitter<'a> {
    fs: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
    dry_run: bool,
}

impl<'a> FileEmitter<'a> {
    pub fn new(fs: &'a dyn Filesystem, reporter: &'a dyn Reporter, dry_run: bool) -> Self {
        Self {
            fs,
            reporter,
            dry_run,
        }
    }

    /// Create `path` and all missing ancestors. No-op if it already exists.
    pub fn ensure_dir(&self, path: &Path) -> RepogenResult<()> {
        if self.dry_run {
            self.reporter
                .info(&format!("[dry-run] would create directory: {}", path.display()));
            return Ok(());
        }
        self.fs.create_dir_all(path)?;
        debug!(path = %path.display(), "directory ensured");
        Ok(())
    }

    /// Write `content` to `path` unless the file already exists.
    ///
    /// The existing file's content always wins; a second call with different
    /// content is a no-op.
    pub fn write_if_absent(&self, path: &Path, content: &str) -> RepogenResult<WriteOutcome> {
        if self.dry_run {
            self.reporter
                .info(&format!("[dry-run] would create: {}", path.display()));
            return Ok(WriteOutcome::DryRun);
        }

        if self.fs.exists(path) {
            debug!(path = %path.display(), "exists, skipping");
            return Ok(WriteOutcome::SkippedExisting);
        }

        self.fs.write_file(path, content)?;
        self.reporter.info(&format!("Created: {}", path.display()));
        Ok(WriteOutcome::Written)
    }
}
