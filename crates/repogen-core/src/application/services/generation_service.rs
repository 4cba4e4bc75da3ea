//! Generation service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the project root and required structure
//! 2. Ensure output directories exist
//! 3. Discover entities and the context identifier
//! 4. Compose artifacts and route them through the emitter
//!
//! The pipeline is strictly one-directional; no step feeds back into an
//! earlier one. "No entities found" is a soft stop: the run ends cleanly
//! without aggregates, since a unit of work over zero repositories is
//! meaningless.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter},
        services::{discovery::EntityDiscoverer, emitter::FileEmitter},
    },
    domain::{
        ContextName, DomainError, EntityName, GeneratedArtifact, ProjectLayout, TemplateSet,
        composer,
    },
    error::RepogenResult,
};

use super::emitter::WriteOutcome;

/// Per-run knobs. Owned by the caller; the service never reads global state.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Report intended actions without touching the filesystem.
    pub dry_run: bool,
    /// Context identifier used when the context directory is missing or
    /// empty.
    pub default_context: ContextName,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            default_context: ContextName::default(),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// All entities processed, aggregates written.
    Completed,
    /// Entity directory empty or missing; nothing generated, not an error.
    NoEntities,
}

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub namespace: String,
    pub context: ContextName,
    pub entities: Vec<EntityName>,
    /// Files created this run.
    pub written: Vec<PathBuf>,
    /// Files that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    /// Every path the run targeted (identical between dry and real runs).
    pub planned: Vec<PathBuf>,
    pub dry_run: bool,
    pub outcome: RunOutcome,
}

/// Main generation service.
///
/// Orchestrates validation, discovery, composition, and emission.
pub struct GenerationService {
    fs: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSet>,
    reporter: Box<dyn Reporter>,
    config: GenerationConfig,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        fs: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSet>,
        reporter: Box<dyn Reporter>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            fs,
            templates,
            reporter,
            config,
        }
    }

    /// Run generation against a project root.
    ///
    /// This is the main use case. Fatal errors abort before any write;
    /// a write failure inside one entity's pair marks that entity failed and
    /// the run continues, surfacing the failures at the end.
    #[instrument(skip_all, fields(root = %root.display(), dry_run = self.config.dry_run))]
    pub fn generate(&self, root: &Path) -> RepogenResult<GenerationReport> {
        // 1. Root must exist and be a directory - checked before anything.
        if !self.fs.is_dir(root) {
            return Err(DomainError::InvalidRoot {
                path: root.display().to_string(),
            }
            .into());
        }

        let layout = ProjectLayout::new(root)?;
        info!(namespace = layout.namespace(), "generation started");

        // 2. Structure gate: both convention directories, before any write.
        self.validate_structure(&layout)?;

        // 3. Output directories (idempotent; intent-only in dry-run).
        let emitter = FileEmitter::new(&*self.fs, &*self.reporter, self.config.dry_run);
        for dir in layout.output_dirs() {
            emitter.ensure_dir(&dir)?;
        }

        // 4. Discovery.
        let discoverer = EntityDiscoverer::new(
            &*self.fs,
            &*self.reporter,
            self.templates.source_extension(),
        );
        let entities = discoverer.list_entities(&layout.entity_dir())?;

        if entities.is_empty() {
            self.reporter.warn("No entity files found.");
            return Ok(GenerationReport {
                namespace: layout.namespace().to_string(),
                context: self.config.default_context.clone(),
                entities,
                written: Vec::new(),
                skipped: Vec::new(),
                planned: Vec::new(),
                dry_run: self.config.dry_run,
                outcome: RunOutcome::NoEntities,
            });
        }

        let context =
            discoverer.detect_context(&layout.context_dir(), &self.config.default_context)?;
        info!(context = %context, entities = entities.len(), "discovery complete");

        // 5. Compose everything up front so the plan can be validated as a
        //    whole before the first artifact write.
        let plan = composer::compose_all(&*self.templates, layout.namespace(), &entities, &context);
        plan.validate()?;

        let mut report = GenerationReport {
            namespace: layout.namespace().to_string(),
            context,
            entities: entities.clone(),
            written: Vec::new(),
            skipped: Vec::new(),
            planned: plan.paths().map(|p| layout.resolve(p)).collect(),
            dry_run: self.config.dry_run,
            outcome: RunOutcome::Completed,
        };

        // 6. Per-entity pairs: interface + implementation, atomically per
        //    entity. A failed pair is recorded and the run continues.
        let artifacts = plan.artifacts();
        let mut failed: Vec<String> = Vec::new();
        for (i, entity) in entities.iter().enumerate() {
            let pair = &artifacts[2 * i..2 * i + 2];
            if let Err(e) = self.emit_pair(&emitter, &layout, pair, &mut report) {
                warn!(entity = %entity, error = %e, "entity pair failed");
                self.reporter
                    .warn(&format!("Failed to generate pair for '{entity}': {e}"));
                failed.push(entity.to_string());
            }
        }

        // 7. Aggregates: unit-of-work pair, then generic base pair. A
        //    failure here is fatal for the run.
        for artifact in &artifacts[2 * entities.len()..] {
            self.emit_artifact(&emitter, &layout, artifact, &mut report)?;
        }

        if !failed.is_empty() {
            return Err(ApplicationError::EntityGenerationFailed { entities: failed }.into());
        }

        self.reporter
            .info("Repository, UnitOfWork, and GenericRepository generation completed.");
        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "generation finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Check the two required convention directories, reporting the first
    /// missing one. Read-only.
    fn validate_structure(&self, layout: &ProjectLayout) -> RepogenResult<()> {
        for dir in layout.required_dirs() {
            if !self.fs.is_dir(&dir) {
                return Err(DomainError::MissingDirectory {
                    path: dir.display().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Emit both halves of an entity pair; stops at the first failure so the
    /// caller can record the entity as failed.
    fn emit_pair(
        &self,
        emitter: &FileEmitter<'_>,
        layout: &ProjectLayout,
        pair: &[GeneratedArtifact],
        report: &mut GenerationReport,
    ) -> RepogenResult<()> {
        for artifact in pair {
            self.emit_artifact(emitter, layout, artifact, report)?;
        }
        Ok(())
    }

    fn emit_artifact(
        &self,
        emitter: &FileEmitter<'_>,
        layout: &ProjectLayout,
        artifact: &GeneratedArtifact,
        report: &mut GenerationReport,
    ) -> RepogenResult<()> {
        let target = layout.resolve(&artifact.path);
        match emitter.write_if_absent(&target, &artifact.content)? {
            WriteOutcome::Written => report.written.push(target),
            WriteOutcome::SkippedExisting => report.skipped.push(target),
            WriteOutcome::DryRun => {}
        }
        Ok(())
    }
}
