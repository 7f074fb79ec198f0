//! The patch mechanism: declarative, idempotent text mutations.
//!
//! A [`PatchSpec`] describes one mutation of a file the external generator
//! produced: where the file lives, how to tell the patch was already
//! applied, how to tell the file is patchable at all, and the rewrite
//! itself. The spec is pure — reading and writing the target is the
//! application layer's job — so every patch is testable as a
//! (detect, already-applied, transform) triple on plain strings.
//!
//! Idempotence contract: for any input `t` where `detects(t)` holds,
//! `is_already_applied(rewrite(t))` must hold, so a second run skips.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// ── Pattern ───────────────────────────────────────────────────────────────────

/// A predicate over file content.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring containment.
    Substring(String),
    /// Compiled regular expression match.
    Regex(Regex),
}

impl Pattern {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Substring(needle) => text.contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// A pure rewrite from old file content to new file content.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Replace every occurrence of a literal fragment.
    ReplaceAll { find: String, replace: String },
    /// Replace the first regex match with literal text (no capture
    /// expansion — the replacement is taken verbatim).
    ReplaceFirst { find: Regex, replace: String },
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::ReplaceAll { find, replace } => text.replace(find.as_str(), replace),
            Self::ReplaceFirst { find, replace } => {
                find.replace(text, NoExpand(replace)).into_owned()
            }
        }
    }
}

// ── PatchSpec ─────────────────────────────────────────────────────────────────

/// One declarative mutation of a generator-produced file.
///
/// Read-only template defined by the tool; never persisted.
#[derive(Debug, Clone)]
pub struct PatchSpec {
    name: &'static str,
    target: PathBuf,
    already_applied: Pattern,
    detect: Pattern,
    transform: Transform,
}

impl PatchSpec {
    pub fn new(
        name: &'static str,
        target: impl Into<PathBuf>,
        already_applied: Pattern,
        detect: Pattern,
        transform: Transform,
    ) -> Self {
        Self {
            name,
            target: target.into(),
            already_applied,
            detect,
            transform,
        }
    }

    /// Short identifier used in logs and the run report.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Target file, relative to the backend source root.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Presence means the mutation already happened; applying again would
    /// corrupt or duplicate content.
    pub fn is_already_applied(&self, text: &str) -> bool {
        self.already_applied.is_match(text)
    }

    /// Presence means the known fragment this patch is scoped to exists.
    pub fn detects(&self, text: &str) -> bool {
        self.detect.is_match(text)
    }

    /// Produce the new file content. Callers check the two predicates
    /// first; `rewrite` itself is unconditional.
    pub fn rewrite(&self, text: &str) -> String {
        self.transform.apply(text)
    }
}

// ── PatchOutcome ──────────────────────────────────────────────────────────────

/// Non-fatal result of applying one patch.
///
/// Fatal read/write failures surface as errors, not outcomes: they abort
/// the remaining patch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchOutcome {
    /// The transform ran and the file was rewritten.
    Applied,
    /// Idempotence short-circuit: the patch marker was already present.
    AlreadyApplied,
    /// The target file does not exist under the backend root.
    MissingTarget,
    /// The target exists but the expected fragment is absent.
    PatternAbsent,
}

impl PatchOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::AlreadyApplied => "already applied, skipped",
            Self::MissingTarget => "target file missing, skipped",
            Self::PatternAbsent => "expected pattern not found, skipped",
        }
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
