//! The patch catalog: every mutation djinit applies to generator output.
//!
//! Separated from the mechanism in `patch.rs` the same way value types are
//! separated from their rules — `patch.rs` defines what a patch *is*,
//! this module defines which patches *exist* for a given configuration.
//!
//! All fragments below mirror what `django-admin startproject` emits
//! today. If the generator's output format changes, the affected patch
//! reports its pattern as absent and the run continues; nothing fails
//! loudly. That fragility is inherent to pattern-scoped patching.

use crate::domain::config::{DbBackend, ProjectConfig};
use crate::domain::patch::{PatchSpec, Pattern, Transform};
use regex::Regex;
use std::sync::LazyLock;

/// The default application-list block: a contiguous bracketed list literal
/// bound to `INSTALLED_APPS`. Dot matches newlines; lazy so the match ends
/// at the first closing bracket.
static INSTALLED_APPS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)INSTALLED_APPS = \[.*?\]").expect("regex: installed apps block")
});

/// Expanded form: a base list, a third-party list, and the original name
/// re-bound to their concatenation, so every other use of
/// `INSTALLED_APPS` in the file keeps its meaning.
const INSTALLED_APPS_REPLACEMENT: &str = "\
APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
]

THIRD_APPS = [
    'django_extensions',
]

INSTALLED_APPS = APPS + THIRD_APPS";

/// Build the full patch sequence for this configuration, in application
/// order. Database patches are only present for PostgreSQL.
pub fn catalog(config: &ProjectConfig) -> Vec<PatchSpec> {
    let settings = format!("{}/settings.py", config.slug());

    let mut patches = vec![installed_apps(&settings)];
    if config.database() == DbBackend::Postgresql {
        patches.push(db_engine(&settings));
        patches.push(db_connection(&settings, config));
    }
    patches.push(wsgi_application(&settings, config));
    patches.push(static_root(&settings));
    patches.push(settings_module(
        "wsgi-settings-module",
        format!("{}/wsgi.py", config.slug()),
        config,
    ));
    patches.push(settings_module(
        "asgi-settings-module",
        format!("{}/asgi.py", config.slug()),
        config,
    ));
    patches
}

fn installed_apps(settings: &str) -> PatchSpec {
    PatchSpec::new(
        "installed-apps",
        settings,
        Pattern::Substring("django_extensions".into()),
        Pattern::Regex(INSTALLED_APPS_BLOCK.clone()),
        Transform::ReplaceFirst {
            find: INSTALLED_APPS_BLOCK.clone(),
            replace: INSTALLED_APPS_REPLACEMENT.into(),
        },
    )
}

fn db_engine(settings: &str) -> PatchSpec {
    let default = "        'ENGINE': 'django.db.backends.sqlite3',";
    let swapped = "        'ENGINE': 'django.db.backends.postgresql',";
    PatchSpec::new(
        "db-engine",
        settings,
        Pattern::Substring(swapped.into()),
        Pattern::Substring(default.into()),
        Transform::ReplaceAll {
            find: default.into(),
            replace: swapped.into(),
        },
    )
}

fn db_connection(settings: &str, config: &ProjectConfig) -> PatchSpec {
    // Host is pinned to the compose file's database service name; port to
    // the standard PostgreSQL port.
    let default = "        'NAME': BASE_DIR / 'db.sqlite3',";
    let block = format!(
        "        'NAME': '{}',\n        'USER': '{}',\n        'PASSWORD': '{}',\n        'HOST': 'db',\n        'PORT': 5432",
        config.db_name(),
        config.db_user(),
        config.db_password(),
    );
    PatchSpec::new(
        "db-connection",
        settings,
        Pattern::Substring("'HOST': 'db',".into()),
        Pattern::Substring(default.into()),
        Transform::ReplaceAll {
            find: default.into(),
            replace: block,
        },
    )
}

fn wsgi_application(settings: &str, config: &ProjectConfig) -> PatchSpec {
    let default = format!("WSGI_APPLICATION = '{}.wsgi.application'", config.slug());
    let relocated = format!(
        "WSGI_APPLICATION = 'backend.{}.wsgi.application'",
        config.slug()
    );
    PatchSpec::new(
        "wsgi-application",
        settings,
        Pattern::Substring(relocated.clone()),
        Pattern::Substring(default.clone()),
        Transform::ReplaceAll {
            find: default,
            replace: relocated,
        },
    )
}

fn static_root(settings: &str) -> PatchSpec {
    let anchor = "STATIC_URL = 'static/'";
    PatchSpec::new(
        "static-root",
        settings,
        Pattern::Substring("STATIC_ROOT".into()),
        Pattern::Substring(anchor.into()),
        Transform::ReplaceAll {
            find: anchor.into(),
            replace: format!("{anchor}\nSTATIC_ROOT = '/app/static'"),
        },
    )
}

/// The generated package lives one directory level below where the
/// generator assumes, so both entry points need their settings-module
/// reference prefixed with the containing directory name.
fn settings_module(name: &'static str, target: String, config: &ProjectConfig) -> PatchSpec {
    let default = format!(
        "os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{}.settings')",
        config.slug()
    );
    let relocated = format!(
        "os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'backend.{}.settings')",
        config.slug()
    );
    PatchSpec::new(
        name,
        target,
        Pattern::Substring(format!("'backend.{}.settings'", config.slug())),
        Pattern::Substring(default.clone()),
        Transform::ReplaceAll {
            find: default,
            replace: relocated,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::RawAnswers;

    // Trimmed copy of what `django-admin startproject shop` emits.
    const STOCK_SETTINGS: &str = r#"from pathlib import Path

BASE_DIR = Path(__file__).resolve().parent.parent

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
]

WSGI_APPLICATION = 'shop.wsgi.application'

DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.sqlite3',
        'NAME': BASE_DIR / 'db.sqlite3',
    }
}

STATIC_URL = 'static/'
"#;

    const STOCK_WSGI: &str = r#"import os

from django.core.wsgi import get_wsgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'shop.settings')

application = get_wsgi_application()
"#;

    fn postgres_config() -> ProjectConfig {
        ProjectConfig::from_answers(RawAnswers {
            project_name: "Shop".into(),
            slug: "shop".into(),
            db_choice: "1".into(),
            ..RawAnswers::default()
        })
        .unwrap()
    }

    fn sqlite_config() -> ProjectConfig {
        ProjectConfig::from_answers(RawAnswers {
            project_name: "Shop".into(),
            slug: "shop".into(),
            db_choice: "2".into(),
            ..RawAnswers::default()
        })
        .unwrap()
    }

    fn find<'a>(patches: &'a [PatchSpec], name: &str) -> &'a PatchSpec {
        patches
            .iter()
            .find(|p| p.name() == name)
            .unwrap_or_else(|| panic!("no patch named {name}"))
    }

    #[test]
    fn sqlite_catalog_omits_database_patches() {
        let names: Vec<_> = catalog(&sqlite_config())
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "installed-apps",
                "wsgi-application",
                "static-root",
                "wsgi-settings-module",
                "asgi-settings-module",
            ]
        );
    }

    #[test]
    fn postgres_catalog_includes_database_patches() {
        let names: Vec<_> = catalog(&postgres_config())
            .iter()
            .map(|p| p.name())
            .collect();
        assert!(names.contains(&"db-engine"));
        assert!(names.contains(&"db-connection"));
    }

    #[test]
    fn patch_targets_are_under_the_generated_package() {
        for patch in catalog(&postgres_config()) {
            assert!(
                patch.target().starts_with("shop"),
                "unexpected target {:?}",
                patch.target()
            );
        }
    }

    #[test]
    fn installed_apps_expands_block_and_keeps_binding() {
        let patches = catalog(&sqlite_config());
        let patch = find(&patches, "installed-apps");

        assert!(patch.detects(STOCK_SETTINGS));
        assert!(!patch.is_already_applied(STOCK_SETTINGS));

        let patched = patch.rewrite(STOCK_SETTINGS);
        assert!(patched.contains("APPS = [\n    'django.contrib.admin',"));
        assert!(patched.contains("THIRD_APPS = [\n    'django_extensions',\n]"));
        assert!(patched.contains("INSTALLED_APPS = APPS + THIRD_APPS"));
        // The original literal block must be gone.
        assert!(!patched.contains("INSTALLED_APPS = [\n"));
        assert!(patch.is_already_applied(&patched));
    }

    #[test]
    fn installed_apps_block_regex_stops_at_first_bracket() {
        // The lazy quantifier must not swallow the DATABASES dict below.
        let patches = catalog(&sqlite_config());
        let patched = find(&patches, "installed-apps").rewrite(STOCK_SETTINGS);
        assert!(patched.contains("DATABASES = {"));
        assert!(patched.contains("WSGI_APPLICATION"));
    }

    #[test]
    fn db_engine_swap_is_exact_and_idempotent() {
        let patches = catalog(&postgres_config());
        let patch = find(&patches, "db-engine");

        let patched = patch.rewrite(STOCK_SETTINGS);
        assert!(patched.contains("'ENGINE': 'django.db.backends.postgresql',"));
        assert!(!patched.contains("'ENGINE': 'django.db.backends.sqlite3',"));
        assert!(patch.is_already_applied(&patched));
        assert_eq!(patch.rewrite(&patched), patched);
    }

    #[test]
    fn db_connection_block_pins_host_and_port() {
        let patches = catalog(&postgres_config());
        let patch = find(&patches, "db-connection");

        let patched = patch.rewrite(STOCK_SETTINGS);
        assert!(patched.contains("'NAME': 'shop',"));
        assert!(patched.contains("'USER': 'shop',"));
        assert!(patched.contains("'PASSWORD': 'password',"));
        assert!(patched.contains("'HOST': 'db',"));
        assert!(patched.contains("'PORT': 5432"));
        assert!(patch.is_already_applied(&patched));
    }

    #[test]
    fn static_root_is_appended_after_static_url_once() {
        let patches = catalog(&sqlite_config());
        let patch = find(&patches, "static-root");

        let patched = patch.rewrite(STOCK_SETTINGS);
        assert!(patched.contains("STATIC_URL = 'static/'\nSTATIC_ROOT = '/app/static'"));
        // Without the already-applied guard this rewrite would duplicate
        // on a second run; the guard is what makes it idempotent.
        assert!(patch.is_already_applied(&patched));
    }

    #[test]
    fn wsgi_application_is_prefixed_with_backend() {
        let patches = catalog(&sqlite_config());
        let patch = find(&patches, "wsgi-application");

        let patched = patch.rewrite(STOCK_SETTINGS);
        assert!(patched.contains("WSGI_APPLICATION = 'backend.shop.wsgi.application'"));
        assert!(patch.is_already_applied(&patched));
        assert!(!patch.detects(&patched));
    }

    #[test]
    fn settings_module_rewrite_targets_both_entry_points() {
        let patches = catalog(&sqlite_config());
        let wsgi = find(&patches, "wsgi-settings-module");
        let asgi = find(&patches, "asgi-settings-module");
        assert_eq!(wsgi.target().to_str(), Some("shop/wsgi.py"));
        assert_eq!(asgi.target().to_str(), Some("shop/asgi.py"));

        let patched = wsgi.rewrite(STOCK_WSGI);
        assert!(patched.contains(
            "os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'backend.shop.settings')"
        ));
        assert!(wsgi.is_already_applied(&patched));
    }

    #[test]
    fn every_patch_is_idempotent_on_stock_settings() {
        // apply(apply(x)) == apply(x), with the already-applied guard
        // standing in for the second apply's short-circuit.
        for patch in catalog(&postgres_config()) {
            let source = if patch.target().ends_with("settings.py") {
                STOCK_SETTINGS
            } else {
                STOCK_WSGI
            };
            if !patch.detects(source) {
                continue;
            }
            let once = patch.rewrite(source);
            assert!(
                patch.is_already_applied(&once),
                "patch {} not detectable as done",
                patch.name()
            );
        }
    }
}
