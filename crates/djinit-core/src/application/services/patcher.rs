//! Source Patcher - applies one declarative patch to disk.
//!
//! The domain's [`PatchSpec`] knows nothing about files; this service
//! sequences its predicates and rewrite against the `Filesystem` port:
//!
//! 1. target missing → skip (non-fatal)
//! 2. read failure → error (fatal for the whole run)
//! 3. already-applied marker present → skip (idempotence)
//! 4. expected fragment absent → skip (non-fatal, distinct message)
//! 5. rewrite and write back, replacing the file; write failure is fatal

use std::path::Path;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{PatchOutcome, PatchSpec},
    error::DjinitResult,
};

/// Applies [`PatchSpec`]s against a backend source root.
pub struct SourcePatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> SourcePatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply a single patch. `Ok` carries every non-fatal outcome; `Err`
    /// means a read or write failed and the run must stop patching.
    #[instrument(skip_all, fields(patch = spec.name()))]
    pub fn apply(&self, backend_root: &Path, spec: &PatchSpec) -> DjinitResult<PatchOutcome> {
        let path = backend_root.join(spec.target());

        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "patch target missing");
            return Ok(PatchOutcome::MissingTarget);
        }

        let content = self.filesystem.read_to_string(&path)?;

        if spec.is_already_applied(&content) {
            return Ok(PatchOutcome::AlreadyApplied);
        }

        if !spec.detects(&content) {
            debug!(path = %path.display(), "expected fragment absent");
            return Ok(PatchOutcome::PatternAbsent);
        }

        let patched = spec.rewrite(&content);
        self.filesystem.write_file(&path, &patched)?;

        Ok(PatchOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Pattern, Transform};
    use djinit_adapters::MemoryFilesystem;
    use std::path::PathBuf;

    fn spec() -> PatchSpec {
        PatchSpec::new(
            "engine-swap",
            "app/settings.py",
            Pattern::Substring("postgresql".into()),
            Pattern::Substring("sqlite3".into()),
            Transform::ReplaceAll {
                find: "sqlite3".into(),
                replace: "postgresql".into(),
            },
        )
    }

    fn fs_with(path: &str, content: &str) -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        let path = PathBuf::from(path);
        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, content).unwrap();
        fs
    }

    #[test]
    fn missing_target_is_a_non_fatal_skip() {
        let fs = MemoryFilesystem::new();
        let patcher = SourcePatcher::new(&fs);
        let outcome = patcher.apply(Path::new("/root"), &spec()).unwrap();
        assert_eq!(outcome, PatchOutcome::MissingTarget);
    }

    #[test]
    fn applies_once_then_reports_already_applied() {
        let fs = fs_with("/root/app/settings.py", "ENGINE = sqlite3");
        let patcher = SourcePatcher::new(&fs);

        let first = patcher.apply(Path::new("/root"), &spec()).unwrap();
        assert_eq!(first, PatchOutcome::Applied);
        assert_eq!(
            fs.read_file(Path::new("/root/app/settings.py")).unwrap(),
            "ENGINE = postgresql"
        );

        let second = patcher.apply(Path::new("/root"), &spec()).unwrap();
        assert_eq!(second, PatchOutcome::AlreadyApplied);
        assert_eq!(
            fs.read_file(Path::new("/root/app/settings.py")).unwrap(),
            "ENGINE = postgresql"
        );
    }

    #[test]
    fn absent_pattern_leaves_file_untouched() {
        let fs = fs_with("/root/app/settings.py", "ENGINE = mysql");
        let patcher = SourcePatcher::new(&fs);

        let outcome = patcher.apply(Path::new("/root"), &spec()).unwrap();
        assert_eq!(outcome, PatchOutcome::PatternAbsent);
        assert_eq!(
            fs.read_file(Path::new("/root/app/settings.py")).unwrap(),
            "ENGINE = mysql"
        );
    }
}
