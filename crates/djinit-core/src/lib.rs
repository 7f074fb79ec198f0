//! Djinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the djinit
//! backend-project bootstrapper, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           djinit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (AssemblerService, SourcePatcher)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Generator)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    djinit-adapters (Infrastructure)     │
//! │ (LocalFilesystem, DjangoAdminGenerator) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (ProjectConfig, Artifact, PatchSpec)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use djinit_adapters::{DjangoAdminGenerator, LocalFilesystem};
//! use djinit_core::{
//!     application::AssemblerService,
//!     domain::{ProjectConfig, RawAnswers},
//! };
//!
//! // 1. Build the configuration once, from raw answers
//! let config = ProjectConfig::from_answers(RawAnswers {
//!     project_name: "Shop".into(),
//!     ..RawAnswers::default()
//! })?;
//!
//! // 2. Use the application service (with injected adapters)
//! let service = AssemblerService::new(
//!     Box::new(LocalFilesystem::new()),
//!     Box::new(DjangoAdminGenerator::new()),
//! );
//! service.assemble(&config, std::path::Path::new("."))?;
//! # Ok::<(), djinit_core::error::DjinitError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssemblerService, PatchReport, RunReport, SourcePatcher,
        ports::{Filesystem, ProjectGenerator},
    };
    pub use crate::domain::{
        Artifact, DbBackend, PatchOutcome, PatchSpec, ProjectConfig, RawAnswers, derive_slug,
    };
    pub use crate::error::{DjinitError, DjinitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
