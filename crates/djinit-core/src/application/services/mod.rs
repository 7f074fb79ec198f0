//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "assemble a project" or "apply a patch".

pub mod assembler;
pub mod patcher;

pub use assembler::{AssemblerService, PatchReport, RunReport};
pub use patcher::SourcePatcher;
