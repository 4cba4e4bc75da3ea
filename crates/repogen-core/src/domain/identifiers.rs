//! Entity and context identifiers.
//!
//! Both are opaque tokens substituted verbatim into template slots; the only
//! domain rule is that they are non-empty file stems. No escaping is
//! performed — the generated source is exactly what the template produces.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Fallback persistence-context type when the context directory is missing
/// or empty. Overridable through `GenerationConfig`.
pub const DEFAULT_CONTEXT_CLASS: &str = "AppDbContext";

/// A domain entity name, derived from the stem of a file in the entity
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Validate and wrap a file stem as an entity name.
    pub fn new(stem: impl Into<String>) -> Result<Self, DomainError> {
        let stem = stem.into();
        if stem.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier {
                name: stem,
                reason: "empty file stem".into(),
            });
        }
        Ok(Self(stem))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `I{E}Repository` — the generated interface type name.
    pub fn repository_interface(&self) -> String {
        format!("I{}Repository", self.0)
    }

    /// `{E}Repository` — the generated implementation type and the
    /// unit-of-work property name.
    pub fn repository_property(&self) -> String {
        format!("{}Repository", self.0)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persistence-context type name that generated repository
/// implementations bind to. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContextName(String);

impl ContextName {
    pub fn new(stem: impl Into<String>) -> Result<Self, DomainError> {
        let stem = stem.into();
        if stem.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier {
                name: stem,
                reason: "empty context name".into(),
            });
        }
        Ok(Self(stem))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContextName {
    fn default() -> Self {
        Self(DEFAULT_CONTEXT_CLASS.to_string())
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
