//! Project layout convention.
//!
//! A project root `<Name>` is expected to contain:
//!
//! ```text
//! <Name>/
//! ├── <Name>.Domain/
//! │   └── Entity/            # one source file per domain entity
//! └── <Name>.Infrastructure/
//!     ├── Context/           # the persistence context type
//!     ├── Abstractions/      # generated: per-entity repository interfaces
//!     ├── Repositories/      # generated: per-entity implementations
//!     └── Base/              # generated: unit of work + generic repository
//! ```
//!
//! The root's base name doubles as the namespace substituted into every
//! template. [`ProjectLayout`] only computes paths; existence checks happen
//! in the application layer through the `Filesystem` port.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Derived paths for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    namespace: String,
}

impl ProjectLayout {
    /// Derive the layout from a project root path.
    ///
    /// Fails if the path has no usable base name (e.g. `/` or `..`).
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        let namespace = root
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::InvalidNamespace {
                path: root.display().to_string(),
            })?
            .to_string();

        Ok(Self { root, namespace })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Namespace substituted into the templates (the root's base name).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<ns>.Domain/Entity` — scanned for entity source files.
    pub fn entity_dir(&self) -> PathBuf {
        self.root
            .join(format!("{}.Domain", self.namespace))
            .join("Entity")
    }

    /// `<ns>.Infrastructure/Context` — scanned for the context type.
    pub fn context_dir(&self) -> PathBuf {
        self.infrastructure().join("Context")
    }

    /// `<ns>.Infrastructure/Abstractions` — output for repository interfaces.
    pub fn abstractions_dir(&self) -> PathBuf {
        self.infrastructure().join("Abstractions")
    }

    /// `<ns>.Infrastructure/Repositories` — output for implementations.
    pub fn repositories_dir(&self) -> PathBuf {
        self.infrastructure().join("Repositories")
    }

    /// `<ns>.Infrastructure/Base` — output for unit-of-work and generic base.
    pub fn base_dir(&self) -> PathBuf {
        self.infrastructure().join("Base")
    }

    /// Directories that must exist before generation starts.
    /// Order matters: validation reports the first missing one.
    pub fn required_dirs(&self) -> [PathBuf; 2] {
        [self.entity_dir(), self.context_dir()]
    }

    /// Directories created (idempotently) before any artifact is written.
    pub fn output_dirs(&self) -> [PathBuf; 3] {
        [
            self.abstractions_dir(),
            self.repositories_dir(),
            self.base_dir(),
        ]
    }

    /// Resolve a plan-relative artifact path against the infrastructure root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.infrastructure().join(relative)
    }

    fn infrastructure(&self) -> PathBuf {
        self.root.join(format!("{}.Infrastructure", self.namespace))
    }
}
