//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use djinit_core::{application::ports::Filesystem, error::DjinitResult};

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
    fn create_dir_all(&self, path: &Path) -> DjinitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DjinitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> DjinitResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> djinit_core::error::DjinitError {
    use djinit_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
