//! Core domain layer for djinit.
//!
//! This module contains pure business logic with ZERO I/O.
//! All filesystem and subprocess concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `ProjectConfig` is constructed once, never mutated
//! - **Declarative patches**: every mutation of generator output is a
//!   `PatchSpec` triple (detect, already-applied, transform), never inline
//!   string surgery in orchestration code

pub mod artifact;
pub mod config;
pub mod error;
pub mod patch;
pub mod patches;

// Re-exports for convenience
pub use artifact::Artifact;
pub use config::{
    DEFAULT_DB_CHOICE, DEFAULT_DB_PASSWORD, DEFAULT_PORT, DbBackend, ProjectConfig, RawAnswers,
    derive_slug,
};
pub use error::{DomainError, ErrorCategory};
pub use patch::{PatchOutcome, PatchSpec, Pattern, Transform};
