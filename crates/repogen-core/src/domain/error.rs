//! Domain-level errors.
//!
//! All errors are:
//! - Cloneable (cheap to pass through reports)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The supplied project root does not exist or is not a directory.
    /// Checked before structure validation.
    #[error("Invalid project root: {path}")]
    InvalidRoot { path: String },

    /// The project root has no usable base name to derive a namespace from.
    #[error("Cannot derive a namespace from root: {path}")]
    InvalidNamespace { path: String },

    /// A required convention directory is missing under the project root.
    #[error("Missing required directory: {path}")]
    MissingDirectory { path: String },

    /// An entity or context identifier failed validation.
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// The generation plan contains the same target path twice.
    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    /// Plan entries must be relative to the project root.
    #[error("Absolute paths not allowed in generation plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    /// The generation plan contains no artifacts.
    #[error("Generation plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRoot { path } => vec![
                format!("'{path}' does not exist or is not a directory"),
                "Pass the root of a layered project, e.g. repogen generate ./Shop".into(),
            ],
            Self::MissingDirectory { path } => vec![
                format!("Expected directory not found: {path}"),
                "A project root <Name> must contain <Name>.Domain/Entity and \
                 <Name>.Infrastructure/Context"
                    .into(),
            ],
            Self::InvalidIdentifier { name, reason } => vec![
                format!("Identifier '{name}' is invalid: {reason}"),
                "Entity files must have a non-empty stem, e.g. Order.cs".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two artifacts target the same path: {path}"),
                "Check for entity files whose stems collide".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRoot { .. }
            | Self::InvalidNamespace { .. }
            | Self::MissingDirectory { .. }
            | Self::InvalidIdentifier { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
