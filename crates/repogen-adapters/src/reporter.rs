//! Reporter adapter backed by `tracing`.

use repogen_core::application::ports::Reporter;
use tracing::{info, warn};

/// Forwards generation progress to the `tracing` subscriber configured by
/// the host binary.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}
