//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permissions, disk, I/O).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// One or more entity pairs could not be written; the rest of the run
    /// completed.
    #[error("Generation failed for entities: {}", .entities.join(", "))]
    EntityGenerationFailed { entities: Vec<String> },

    /// Shared state access failed (lock poisoned).
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::EntityGenerationFailed { entities } => vec![
                format!("Failed entities: {}", entities.join(", ")),
                "Files written before the failure are kept; rerun after fixing \
                 the cause to generate the missing ones"
                    .into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::EntityGenerationFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
