//! Application layer for djinit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AssemblerService, SourcePatcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rendering and patch rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AssemblerService, PatchReport, RunReport, SourcePatcher};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProjectGenerator};

pub use error::ApplicationError;
