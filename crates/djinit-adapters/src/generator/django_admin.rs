//! `django-admin startproject` subprocess adapter.

use std::path::Path;
use std::process::Command;

use djinit_core::{
    application::{ApplicationError, ports::ProjectGenerator},
    error::DjinitResult,
};
use tracing::{debug, warn};

/// Production generator: shells out to the framework's own scaffolder.
///
/// A non-zero exit from the scaffolder is logged but does not error: the
/// assembler's later patch steps detect a missing or unexpected tree on
/// their own and skip accordingly. Only failure to spawn the process at
/// all (binary not installed) is surfaced.
#[derive(Debug, Clone)]
pub struct DjangoAdminGenerator {
    command: String,
}

impl DjangoAdminGenerator {
    pub fn new() -> Self {
        Self {
            command: "django-admin".into(),
        }
    }

    /// Override the scaffolder binary (testing, alternative installs).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for DjangoAdminGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectGenerator for DjangoAdminGenerator {
    fn start_project(&self, slug: &str, backend_dir: &Path) -> DjinitResult<()> {
        debug!(command = %self.command, slug, dir = %backend_dir.display(), "invoking generator");

        let output = Command::new(&self.command)
            .arg("startproject")
            .arg(slug)
            .arg(backend_dir)
            .output()
            .map_err(|e| ApplicationError::GeneratorSpawn {
                command: format!("{} startproject {} {}", self.command, slug, backend_dir.display()),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, stderr = %stderr, "generator exited with failure");
        }

        Ok(())
    }
}
