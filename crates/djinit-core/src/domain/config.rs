//! Domain configuration: `ProjectConfig`, `DbBackend`, `RawAnswers`.
//!
//! # Design
//!
//! `ProjectConfig` is the single immutable record every other component
//! reads. It is constructed exactly once per run from the raw strings the
//! input collaborator (CLI flags or interactive prompts) collected, with
//! all defaulting and derivation applied here and nowhere else.
//!
//! Defaults are explicit constants rather than process-wide mutable state,
//! so tests can assert against them directly.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port the served application is published on when the user leaves the
/// prompt blank.
pub const DEFAULT_PORT: &str = "8000";

/// Placeholder database password; interpolated verbatim into generated
/// files, so it is deliberately obvious.
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Menu choice selected when the database prompt is left blank.
pub const DEFAULT_DB_CHOICE: &str = "1";

/// Pinned dependency set written to the requirements manifest, in declared
/// order. Fixed for a given djinit version; not user-configurable.
pub const PINNED_REQUIREMENTS: &[(&str, &str)] = &[
    ("Django", "5.1.5"),
    ("asgiref", "3.8.1"),
    ("sqlparse", "0.5.3"),
    ("pytz", "2025.1"),
    ("django-extensions", "3.2.3"),
    ("psycopg2-binary", "2.9.9"),
    ("jsonschema", "4.23.0"),
    ("requests", "2.32.3"),
    ("pytest", "8.3.4"),
    ("pytest-django", "4.9.0"),
    ("gunicorn", "21.2.0"),
];

// ── DbBackend ─────────────────────────────────────────────────────────────────

/// The database backend the generated project is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbBackend {
    Postgresql,
    Sqlite,
}

impl DbBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Map the raw menu choice to a backend.
    ///
    /// Only `"1"` selects PostgreSQL; every other value, including
    /// unrecognised garbage, silently falls back to SQLite. No error is
    /// raised for an invalid choice.
    pub fn from_choice(raw: &str) -> Self {
        if raw.trim() == "1" {
            Self::Postgresql
        } else {
            Self::Sqlite
        }
    }
}

impl fmt::Display for DbBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RawAnswers ────────────────────────────────────────────────────────────────

/// The raw strings collected by the input collaborator, untouched.
///
/// Six strings plus one menu choice; the core assumes no other shape.
/// Blank fields mean "use the default" and are resolved by
/// [`ProjectConfig::from_answers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnswers {
    pub project_name: String,
    pub slug: String,
    pub port: String,
    pub db_choice: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
}

// ── ProjectConfig ─────────────────────────────────────────────────────────────

/// Validated, immutable record of all user-supplied and derived settings.
///
/// Invariants upheld by construction:
/// - `slug` is non-empty and is the one key used for directory names and
///   module paths everywhere
/// - `port` is a non-empty string (never validated as numeric)
/// - with [`DbBackend::Sqlite`], the three database credential fields are
///   empty strings, never absent — downstream interpolation assumes
///   presence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    project_name: String,
    slug: String,
    port: String,
    database: DbBackend,
    db_name: String,
    db_user: String,
    db_password: String,
}

impl ProjectConfig {
    /// Resolve raw answers into a fully-populated configuration.
    ///
    /// The only fatal input is a blank project name. Everything else
    /// defaults: slug from the name, port to [`DEFAULT_PORT`], database
    /// credentials to the slug and [`DEFAULT_DB_PASSWORD`].
    pub fn from_answers(answers: RawAnswers) -> Result<Self, DomainError> {
        let project_name = answers.project_name.trim().to_string();
        if project_name.is_empty() {
            return Err(DomainError::MissingProjectName);
        }

        let slug = non_blank(&answers.slug).unwrap_or_else(|| derive_slug(&project_name));
        let port = non_blank(&answers.port).unwrap_or_else(|| DEFAULT_PORT.to_string());
        let database = DbBackend::from_choice(&answers.db_choice);

        let (db_name, db_user, db_password) = match database {
            DbBackend::Postgresql => (
                non_blank(&answers.db_name).unwrap_or_else(|| slug.clone()),
                non_blank(&answers.db_user).unwrap_or_else(|| slug.clone()),
                non_blank(&answers.db_password)
                    .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
            ),
            DbBackend::Sqlite => (String::new(), String::new(), String::new()),
        };

        Ok(Self {
            project_name,
            slug,
            port,
            database,
            db_name,
            db_user,
            db_password,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn database(&self) -> DbBackend {
        self.database
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn db_user(&self) -> &str {
        &self.db_user
    }

    pub fn db_password(&self) -> &str {
        &self.db_password
    }

    /// The pinned `(package, version)` pairs for the requirements manifest.
    pub fn requirements(&self) -> &'static [(&'static str, &'static str)] {
        PINNED_REQUIREMENTS
    }
}

/// Derive a filesystem- and identifier-safe key from the project name:
/// lowercase, each space replaced with a hyphen.
///
/// Deliberately minimal: punctuation and non-ASCII pass through unchanged.
/// The external generator applies its own stricter validation downstream.
pub fn derive_slug(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "-")
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(name: &str) -> RawAnswers {
        RawAnswers {
            project_name: name.into(),
            ..RawAnswers::default()
        }
    }

    #[test]
    fn missing_project_name_is_fatal() {
        assert_eq!(
            ProjectConfig::from_answers(answers("")),
            Err(DomainError::MissingProjectName)
        );
        assert_eq!(
            ProjectConfig::from_answers(answers("   ")),
            Err(DomainError::MissingProjectName)
        );
    }

    #[test]
    fn any_non_empty_name_constructs_with_non_empty_slug() {
        for name in ["Demo", "My Project", "ÜberShop", "a b c"] {
            let cfg = ProjectConfig::from_answers(answers(name)).unwrap();
            assert!(!cfg.slug().is_empty(), "empty slug for: {name}");
        }
    }

    #[test]
    fn slug_derivation_lowercases_and_hyphenates() {
        assert_eq!(derive_slug("My Project"), "my-project");
    }

    #[test]
    fn slug_derivation_is_minimal() {
        // Punctuation and non-ASCII pass through untouched.
        assert_eq!(derive_slug("Héllo World!"), "héllo-world!");
        assert_eq!(derive_slug("a_b.c"), "a_b.c");
    }

    #[test]
    fn explicit_slug_wins_over_derivation() {
        let mut a = answers("My Project");
        a.slug = "customkey".into();
        let cfg = ProjectConfig::from_answers(a).unwrap();
        assert_eq!(cfg.slug(), "customkey");
    }

    #[test]
    fn blank_port_defaults() {
        let cfg = ProjectConfig::from_answers(answers("Demo")).unwrap();
        assert_eq!(cfg.port(), DEFAULT_PORT);
    }

    #[test]
    fn port_is_kept_verbatim_even_when_not_numeric() {
        let mut a = answers("Demo");
        a.port = "not-a-port".into();
        let cfg = ProjectConfig::from_answers(a).unwrap();
        assert_eq!(cfg.port(), "not-a-port");
    }

    #[test]
    fn db_choice_one_selects_postgres() {
        assert_eq!(DbBackend::from_choice("1"), DbBackend::Postgresql);
        assert_eq!(DbBackend::from_choice(" 1 "), DbBackend::Postgresql);
    }

    #[test]
    fn any_other_db_choice_selects_sqlite_without_error() {
        for raw in ["2", "", "3", "postgres", "yes please"] {
            assert_eq!(DbBackend::from_choice(raw), DbBackend::Sqlite, "{raw:?}");
        }
    }

    #[test]
    fn sqlite_leaves_credentials_empty_strings() {
        let mut a = answers("Demo");
        a.db_choice = "2".into();
        // Credentials supplied anyway must be ignored for sqlite.
        a.db_name = "ignored".into();
        let cfg = ProjectConfig::from_answers(a).unwrap();
        assert_eq!(cfg.database(), DbBackend::Sqlite);
        assert_eq!(cfg.db_name(), "");
        assert_eq!(cfg.db_user(), "");
        assert_eq!(cfg.db_password(), "");
    }

    #[test]
    fn postgres_credentials_default_from_slug() {
        let mut a = answers("Shop");
        a.slug = "shop".into();
        a.port = "9000".into();
        a.db_choice = "1".into();
        let cfg = ProjectConfig::from_answers(a).unwrap();
        assert_eq!(cfg.db_name(), "shop");
        assert_eq!(cfg.db_user(), "shop");
        assert_eq!(cfg.db_password(), DEFAULT_DB_PASSWORD);
    }

    #[test]
    fn postgres_explicit_credentials_are_kept() {
        let mut a = answers("Shop");
        a.db_choice = "1".into();
        a.db_name = "orders".into();
        a.db_user = "admin".into();
        a.db_password = "hunter2".into();
        let cfg = ProjectConfig::from_answers(a).unwrap();
        assert_eq!(cfg.db_name(), "orders");
        assert_eq!(cfg.db_user(), "admin");
        assert_eq!(cfg.db_password(), "hunter2");
    }

    #[test]
    fn requirements_are_pinned_in_declared_order() {
        let cfg = ProjectConfig::from_answers(answers("Demo")).unwrap();
        let reqs = cfg.requirements();
        assert_eq!(reqs.first(), Some(&("Django", "5.1.5")));
        assert_eq!(reqs.last(), Some(&("gunicorn", "21.2.0")));
        assert_eq!(reqs.len(), 11);
    }
}
