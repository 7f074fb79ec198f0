//! Unified error handling for Djinit Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Djinit Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// djinit-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum DjinitError {
    /// Errors from the domain layer (input validation violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DjinitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in djinit".into(),
                "Please report this issue at: https://github.com/djinit/djinit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    External,
    Internal,
}

/// Convenient result type alias.
pub type DjinitResult<T> = Result<T, DjinitError>;
