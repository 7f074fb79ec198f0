//! Assembler Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Create the project root and its fixed subdirectories
//! 2. Invoke the external framework generator
//! 3. Write every rendered artifact
//! 4. Apply the patch catalog against the generated sources
//!
//! Execution is strictly sequential with no rollback: a fatal failure
//! stops the run but leaves prior writes in place, and re-running against
//! the same directory is the supported recovery path (directory creation
//! and every patch are idempotent).

use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, ProjectGenerator},
        services::patcher::SourcePatcher,
    },
    domain::{Artifact, PatchOutcome, ProjectConfig, patches},
    error::DjinitResult,
};

/// Fixed subdirectories created under the project root.
const PROJECT_SUBDIRS: [&str; 3] = ["backend", "docs", "data"];

/// What one run did to one patch target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub name: &'static str,
    pub target: PathBuf,
    pub outcome: PatchOutcome,
}

/// Summary of a completed assembly, for the CLI to display.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project_root: PathBuf,
    pub artifacts: Vec<PathBuf>,
    pub patches: Vec<PatchReport>,
}

impl RunReport {
    /// Number of patches whose transform actually ran.
    pub fn applied_count(&self) -> usize {
        self.patches.iter().filter(|p| p.outcome.is_applied()).count()
    }

    /// True when every patch short-circuited on its idempotence marker —
    /// the signature of a re-run against an already-assembled tree.
    pub fn all_already_applied(&self) -> bool {
        !self.patches.is_empty()
            && self
                .patches
                .iter()
                .all(|p| p.outcome == PatchOutcome::AlreadyApplied)
    }
}

/// Main assembly service.
///
/// Orchestrates directory creation, generator invocation, artifact
/// writing, and patching.
pub struct AssemblerService {
    filesystem: Box<dyn Filesystem>,
    generator: Box<dyn ProjectGenerator>,
}

impl AssemblerService {
    /// Create a new assembler service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, generator: Box<dyn ProjectGenerator>) -> Self {
        Self {
            filesystem,
            generator,
        }
    }

    /// Assemble a project under `output_dir`.
    ///
    /// This is the main use case - turns a configuration into a project
    /// directory ready to run.
    #[instrument(skip_all, fields(slug = config.slug(), database = %config.database()))]
    pub fn assemble(&self, config: &ProjectConfig, output_dir: &Path) -> DjinitResult<RunReport> {
        info!("Assembling '{}' project", config.project_name());

        // 1. Project root and fixed subdirectories; exist_ok semantics so a
        //    re-run augments rather than fails.
        let project_root = output_dir.join(config.slug());
        self.filesystem.create_dir_all(&project_root)?;
        for sub in PROJECT_SUBDIRS {
            self.filesystem.create_dir_all(&project_root.join(sub))?;
        }

        // 2. External generator. Its exit status is not inspected here and
        //    never gates the remaining steps: if it produced nothing, the
        //    patches below report their targets as missing instead.
        let backend_root = project_root.join("backend");
        if let Err(e) = self.generator.start_project(config.slug(), &backend_root) {
            warn!(error = %e, "generator invocation failed; continuing");
        }

        // 3. Artifacts, full overwrite.
        let mut artifacts = Vec::new();
        for artifact in Artifact::ALL {
            let path = project_root.join(artifact.relative_path());
            self.filesystem.write_file(&path, &artifact.render(config))?;
            info!(artifact = %artifact, "Artifact written");
            artifacts.push(path);
        }

        // 4. Patch sequence. Non-fatal skips never block later patches;
        //    the first read/write failure aborts via `?`.
        let patcher = SourcePatcher::new(self.filesystem.as_ref());
        let mut patch_reports = Vec::new();
        for spec in patches::catalog(config) {
            let outcome = patcher.apply(&backend_root, &spec)?;
            match outcome {
                PatchOutcome::Applied => info!(patch = spec.name(), "Patch applied"),
                PatchOutcome::AlreadyApplied => info!(patch = spec.name(), "Patch already applied"),
                PatchOutcome::MissingTarget | PatchOutcome::PatternAbsent => {
                    warn!(patch = spec.name(), outcome = %outcome, "Patch skipped");
                }
            }
            patch_reports.push(PatchReport {
                name: spec.name(),
                target: spec.target().to_path_buf(),
                outcome,
            });
        }

        info!("Assembly completed successfully");
        Ok(RunReport {
            project_root,
            artifacts,
            patches: patch_reports,
        })
    }
}
