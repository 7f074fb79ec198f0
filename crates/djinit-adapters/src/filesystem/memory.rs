//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use djinit_core::application::ports::Filesystem;

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

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> djinit_core::error::DjinitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| djinit_core::application::ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> djinit_core::error::DjinitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| djinit_core::application::ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(djinit_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> djinit_core::error::DjinitResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| djinit_core::application::ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            djinit_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
