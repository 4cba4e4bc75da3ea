//! Generation plan: the artifacts one run intends to write.
//!
//! This is the output of template composition. It contains no business
//! logic, only data — the emitter decides what actually reaches disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A single (relative target path, rendered content) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ordered list of artifacts for one run.
///
/// Order is significant: per-entity pairs first (in entity order), then the
/// unit-of-work pair, then the generic repository pair.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    artifacts: Vec<GeneratedArtifact>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn extend(&mut self, artifacts: impl IntoIterator<Item = GeneratedArtifact>) {
        self.artifacts.extend(artifacts);
    }

    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Reject empty plans, duplicate targets, and absolute paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            let path_str = artifact.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
            if artifact.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(path: &str) -> GeneratedArtifact {
        GeneratedArtifact::new(path, "content")
    }

    #[test]
    fn empty_plan_is_invalid() {
        assert_eq!(GenerationPlan::new().validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let mut plan = GenerationPlan::new();
        plan.push(artifact("Base/IUnitOfWork.cs"));
        plan.push(artifact("Base/IUnitOfWork.cs"));
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_target_is_rejected() {
        let mut plan = GenerationPlan::new();
        plan.push(artifact("/etc/passwd"));
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn push_preserves_order() {
        let mut plan = GenerationPlan::new();
        plan.push(artifact("Abstractions/IOrderRepository.cs"));
        plan.push(artifact("Repositories/OrderRepository.cs"));
        plan.validate().unwrap();

        let paths: Vec<_> = plan.paths().collect();
        assert_eq!(paths[0], Path::new("Abstractions/IOrderRepository.cs"));
        assert_eq!(paths[1], Path::new("Repositories/OrderRepository.cs"));
    }
}
