use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (constructed from owned strings only)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The project name is the one mandatory input; an empty value aborts
    /// the run before any filesystem mutation.
    #[error("missing project name")]
    MissingProjectName,

    #[error("invalid patch '{patch}': {reason}")]
    InvalidPatch { patch: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectName => vec![
                "The project name is required and cannot be blank".into(),
                "Pass it as the first argument: djinit new \"My Project\"".into(),
            ],
            Self::InvalidPatch { patch, reason } => vec![
                format!("Patch '{}' could not be constructed: {}", patch, reason),
                "This is a bug in djinit, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectName => ErrorCategory::Validation,
            Self::InvalidPatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
