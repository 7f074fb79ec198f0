//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `djinit-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: File operations
//!   - `ProjectGenerator`: The external framework's own scaffolder
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ProjectGenerator};
