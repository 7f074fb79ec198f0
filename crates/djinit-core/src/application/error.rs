//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input rules.
//! Input rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Fatal: the run cannot proceed without
    /// the file it was reading or writing.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external generator command could not be started at all.
    #[error("Failed to invoke generator '{command}': {reason}")]
    GeneratorSpawn { command: String, reason: String },

    /// Shared state access failed (lock poisoned, etc.).
    #[error("Filesystem store error")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::GeneratorSpawn { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure django-admin is installed and on your PATH".into(),
                "Try: pip install Django".into(),
            ],
            Self::LockPoisoned => vec![
                "Internal filesystem state was poisoned".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::GeneratorSpawn { .. } => ErrorCategory::External,
        }
    }
}
