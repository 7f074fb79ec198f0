//! Comprehensive error handling for the djinit CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error as _, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use djinit_core::error::{DjinitError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `djinit-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Bootstrap failed: {0}")]
    Core(#[from] DjinitError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An interactive prompt failed (terminal gone, read error).
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/djinit/config.toml".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],

            Self::PromptFailed { message } => vec![
                format!("Interactive input failed: {}", message),
                "Pass the values as flags instead, e.g. --db sqlite".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!("Install with the feature enabled: cargo install djinit-cli --features {feature}"),
                "Or pass the project name and flags directly: djinit new NAME --yes".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        let _ = write!(
            output,
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        );

        // Main error message
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(output, "\n  {} {}\n", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {}", suggestion);
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            let _ = writeln!(
                output,
                "{} {}",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {}\n", self);

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, cancellation).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use djinit_core::domain::DomainError;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_name_suggestions_mention_the_argument() {
        let err = CliError::Core(DomainError::MissingProjectName.into());
        assert!(err.suggestions().iter().any(|s| s.contains("djinit new")));
    }

    #[test]
    fn cancelled_suggestions_non_empty() {
        assert!(!CliError::Cancelled.suggestions().is_empty());
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_missing_name_is_user_error() {
        let err = CliError::Core(DomainError::MissingProjectName.into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_cancelled() {
        assert_eq!(CliError::Cancelled.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Cancelled;
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Cancelled;
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
