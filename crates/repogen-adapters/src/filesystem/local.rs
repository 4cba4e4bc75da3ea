//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use repogen_core::{application::ports::Filesystem, error::RepogenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> RepogenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RepogenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn list_files(&self, dir: &Path) -> RepogenResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                map_io_error(
                    dir,
                    e.into_io_error()
                        .unwrap_or_else(|| io::Error::other("walk error")),
                    "read directory",
                )
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> repogen_core::error::RepogenError {
    use repogen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_files_skips_subdirectories() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("Order.cs"), "class Order {}").unwrap();
        std::fs::create_dir(tmp.path().join("Nested")).unwrap();
        std::fs::write(tmp.path().join("Nested").join("Inner.cs"), "").unwrap();

        let fs = LocalFilesystem::new();
        let files = fs.list_files(tmp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Order.cs"));
    }

    #[test]
    fn write_and_exists_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Sub").join("file.cs");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(path.parent().unwrap()).unwrap();
        assert!(!fs.exists(&path));
        fs.write_file(&path, "content").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn list_files_on_missing_dir_is_error() {
        let fs = LocalFilesystem::new();
        assert!(fs.list_files(Path::new("/no/such/dir")).is_err());
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.cs");
        std::fs::write(&file, "").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.is_dir(tmp.path()));
        assert!(!fs.is_dir(&file));
    }
}
