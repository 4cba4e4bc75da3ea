//! Entity and context discovery.
//!
//! Scans the convention directories through the `Filesystem` port. Stems
//! are sorted lexicographically before use: filesystem enumeration order is
//! unspecified, and both the unit-of-work property order and the "which
//! context file wins" choice must be deterministic across runs.

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    application::ports::{Filesystem, Reporter},
    domain::{ContextName, EntityName},
    error::RepogenResult,
};

/// Discovers entity and context identifiers for one run.
pub struct EntityDiscoverer<'a> {
    fs: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
    extension: &'a str,
}

impl<'a> EntityDiscoverer<'a> {
    pub fn new(fs: &'a dyn Filesystem, reporter: &'a dyn Reporter, extension: &'a str) -> Self {
        Self {
            fs,
            reporter,
            extension,
        }
    }

    /// Entity identifiers from the entity directory, sorted and deduplicated.
    ///
    /// A missing directory is not fatal: it degenerates to "zero entities",
    /// which the orchestrator treats as a clean early stop.
    pub fn list_entities(&self, entity_dir: &Path) -> RepogenResult<Vec<EntityName>> {
        if !self.fs.is_dir(entity_dir) {
            self.reporter.warn(&format!(
                "Entity directory not found: {}",
                entity_dir.display()
            ));
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for stem in self.matching_stems(entity_dir)? {
            names.push(EntityName::new(stem)?);
        }

        names.sort();
        names.dedup();
        debug!(count = names.len(), "entities discovered");
        Ok(names)
    }

    /// The context identifier, or `fallback` when the directory is missing
    /// or holds no matching file.
    ///
    /// Multiple candidates are ambiguous: the lexicographically first wins,
    /// with a warning naming the others.
    pub fn detect_context(
        &self,
        context_dir: &Path,
        fallback: &ContextName,
    ) -> RepogenResult<ContextName> {
        if !self.fs.is_dir(context_dir) {
            self.reporter.warn(&format!(
                "Context directory not found: {} (using {fallback})",
                context_dir.display()
            ));
            return Ok(fallback.clone());
        }

        let mut stems = self.matching_stems(context_dir)?;
        stems.sort();
        stems.dedup();

        match stems.as_slice() {
            [] => {
                warn!(dir = %context_dir.display(), "context directory is empty");
                Ok(fallback.clone())
            }
            [only] => Ok(ContextName::new(only.clone())?),
            [first, rest @ ..] => {
                self.reporter.warn(&format!(
                    "Multiple context candidates found, using '{first}' (ignored: {})",
                    rest.join(", ")
                ));
                Ok(ContextName::new(first.clone())?)
            }
        }
    }

    /// Stems of files in `dir` carrying the configured source extension.
    fn matching_stems(&self, dir: &Path) -> RepogenResult<Vec<String>> {
        let files = self.fs.list_files(dir)?;
        Ok(files
            .into_iter()
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e == self.extension)
            })
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NullReporter;
    use crate::error::RepogenResult;
    use std::path::PathBuf;

    /// Test double: a fixed directory listing.
    struct FixedFs {
        dir: PathBuf,
        files: Vec<PathBuf>,
    }

    impl FixedFs {
        fn new(dir: &str, files: &[&str]) -> Self {
            let dir = PathBuf::from(dir);
            let files = files.iter().map(|f| dir.join(f)).collect();
            Self { dir, files }
        }
    }

    impl Filesystem for FixedFs {
        fn exists(&self, path: &Path) -> bool {
            path == self.dir
        }

        fn is_dir(&self, path: &Path) -> bool {
            path == self.dir
        }

        fn create_dir_all(&self, _path: &Path) -> RepogenResult<()> {
            Ok(())
        }

        fn write_file(&self, _path: &Path, _content: &str) -> RepogenResult<()> {
            Ok(())
        }

        fn list_files(&self, _dir: &Path) -> RepogenResult<Vec<PathBuf>> {
            Ok(self.files.clone())
        }
    }

    #[test]
    fn entities_are_sorted_and_filtered_by_extension() {
        let fs = FixedFs::new("/p/Entity", &["Order.cs", "Customer.cs", "notes.txt"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let names = discoverer.list_entities(Path::new("/p/Entity")).unwrap();
        let names: Vec<_> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Customer", "Order"]);
    }

    #[test]
    fn duplicate_stems_collapse() {
        // Same stem under different casing of extension handling is out of
        // scope; identical stems collapse to one identifier.
        let fs = FixedFs::new("/p/Entity", &["Order.cs", "Order.cs"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let names = discoverer.list_entities(Path::new("/p/Entity")).unwrap();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn missing_entity_dir_yields_empty() {
        let fs = FixedFs::new("/p/Entity", &["Order.cs"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let names = discoverer.list_entities(Path::new("/p/Missing")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn missing_context_dir_falls_back() {
        let fs = FixedFs::new("/p/Context", &[]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let ctx = discoverer
            .detect_context(Path::new("/p/Missing"), &ContextName::default())
            .unwrap();
        assert_eq!(ctx.as_str(), "AppDbContext");
    }

    #[test]
    fn empty_context_dir_falls_back() {
        let fs = FixedFs::new("/p/Context", &["README.md"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let ctx = discoverer
            .detect_context(Path::new("/p/Context"), &ContextName::default())
            .unwrap();
        assert_eq!(ctx.as_str(), "AppDbContext");
    }

    #[test]
    fn single_context_candidate_wins() {
        let fs = FixedFs::new("/p/Context", &["ShopDbContext.cs"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let ctx = discoverer
            .detect_context(Path::new("/p/Context"), &ContextName::default())
            .unwrap();
        assert_eq!(ctx.as_str(), "ShopDbContext");
    }

    #[test]
    fn ambiguous_context_takes_lexicographic_first() {
        let fs = FixedFs::new("/p/Context", &["ZebraContext.cs", "AlphaContext.cs"]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");

        let ctx = discoverer
            .detect_context(Path::new("/p/Context"), &ContextName::default())
            .unwrap();
        assert_eq!(ctx.as_str(), "AlphaContext");
    }

    #[test]
    fn custom_fallback_is_respected() {
        let fs = FixedFs::new("/p/Context", &[]);
        let discoverer = EntityDiscoverer::new(&fs, &NullReporter, "cs");
        let fallback = ContextName::new("CustomContext").unwrap();

        let ctx = discoverer
            .detect_context(Path::new("/p/Context"), &fallback)
            .unwrap();
        assert_eq!(ctx.as_str(), "CustomContext");
    }
}
