//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Pre-seed for the exposed port, before the core's own fallback.
    pub port: Option<String>,
    /// Pre-seed for the database backend (`postgresql` or `sqlite`).
    pub database: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` path must exist and parse; the
    /// default location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.djinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "djinit", "djinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".djinit.toml"))
    }
}
