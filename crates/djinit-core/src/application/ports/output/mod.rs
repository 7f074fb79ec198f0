//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `djinit-adapters` crate provides implementations.

use crate::error::DjinitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `djinit_adapters::filesystem::LocalFilesystem` (production)
/// - `djinit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Directory creation is idempotent: creating an existing directory is
///   a no-op, which is what makes re-running the assembler safe
/// - Reads exist because the patcher must load generator output before
///   rewriting it; writes always replace the whole file
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DjinitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> DjinitResult<()>;

    /// Read a file's full content.
    fn read_to_string(&self, path: &Path) -> DjinitResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external framework's project generator.
///
/// Implemented by:
/// - `djinit_adapters::generator::DjangoAdminGenerator` (production)
/// - `djinit_adapters::generator::FakeGenerator` (testing)
///
/// The generator is an opaque black box: on success it produces a
/// directory tree containing a package named after the slug, with a
/// settings file and the two entry-point files the patch catalog targets.
pub trait ProjectGenerator: Send + Sync {
    /// Generate the framework project named `slug` into `backend_dir`.
    ///
    /// An error here means the generator could not be *started*; the
    /// generator's own exit status is deliberately not a contract of this
    /// port (see the assembler's handling).
    fn start_project(&self, slug: &str, backend_dir: &Path) -> DjinitResult<()>;
}
