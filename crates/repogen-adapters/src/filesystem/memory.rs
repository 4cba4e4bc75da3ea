//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use repogen_core::application::ApplicationError;
use repogen_core::application::ports::Filesystem;
use repogen_core::error::RepogenResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory (testing helper, infallible).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap_or_else(|p| p.into_inner());
        insert_with_ancestors(&mut inner.directories, path.into());
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap_or_else(|p| p.into_inner());
        if let Some(parent) = path.parent() {
            insert_with_ancestors(&mut inner.directories, parent.to_path_buf());
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn all_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|p| p.into_inner());
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap_or_else(|p| p.into_inner()).files.len()
    }

    /// Number of directories currently stored.
    pub fn dir_count(&self) -> usize {
        self.inner.read().unwrap_or_else(|p| p.into_inner()).directories.len()
    }
}

fn insert_with_ancestors(directories: &mut HashSet<PathBuf>, path: PathBuf) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(|p| p.into_inner());
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap_or_else(|p| p.into_inner()).directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> RepogenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        insert_with_ancestors(&mut inner.directories, path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> RepogenResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(dir) {
            return Err(ApplicationError::Filesystem {
                path: dir.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
