//! End-to-end tests for the assembler over in-memory adapters.

use std::path::Path;

use djinit_adapters::{FakeGenerator, MemoryFilesystem};
use djinit_core::{
    application::{AssemblerService, Filesystem},
    domain::{DbBackend, PatchOutcome, ProjectConfig, RawAnswers},
};

fn service(fs: &MemoryFilesystem) -> AssemblerService {
    AssemblerService::new(
        Box::new(fs.clone()),
        Box::new(FakeGenerator::new(fs.clone())),
    )
}

fn sqlite_answers() -> RawAnswers {
    // Scenario A: name only, blank slug and port, explicit sqlite choice.
    RawAnswers {
        project_name: "Demo".into(),
        db_choice: "2".into(),
        ..RawAnswers::default()
    }
}

fn postgres_answers() -> RawAnswers {
    // Scenario B: explicit slug and port, postgres with blank credentials.
    RawAnswers {
        project_name: "Shop".into(),
        slug: "shop".into(),
        port: "9000".into(),
        db_choice: "1".into(),
        ..RawAnswers::default()
    }
}

#[test]
fn sqlite_end_to_end_produces_single_service_compose() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(sqlite_answers()).unwrap();
    let report = service(&fs).assemble(&config, Path::new("/out")).unwrap();

    assert_eq!(report.project_root, Path::new("/out/demo"));

    let compose = fs.read_file(Path::new("/out/demo/docker-compose.yml")).unwrap();
    assert_eq!(compose.matches("build: .").count(), 1);
    assert!(!compose.contains("db:"));
    assert!(!compose.contains("postgres_data"));
    assert!(compose.contains("gunicorn demo.wsgi:application --bind 0.0.0.0:8000"));

    // Fixed layout under the project root.
    for dir in ["backend", "docs", "data"] {
        assert!(fs.exists(&Path::new("/out/demo").join(dir)), "{dir} missing");
    }
    for file in ["requirements.txt", "Dockerfile", "docker-compose.yml", "README.md"] {
        assert!(fs.exists(&Path::new("/out/demo").join(file)), "{file} missing");
    }
}

#[test]
fn postgres_end_to_end_wires_credentials_and_module_path() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(postgres_answers()).unwrap();

    assert_eq!(config.db_name(), "shop");
    assert_eq!(config.db_user(), "shop");
    assert_eq!(config.db_password(), "password");

    service(&fs).assemble(&config, Path::new("/out")).unwrap();

    let compose = fs.read_file(Path::new("/out/shop/docker-compose.yml")).unwrap();
    assert!(compose.contains("gunicorn shop.wsgi:application --bind 0.0.0.0:9000"));
    assert!(compose.contains("\"9000:9000\""));
    assert!(compose.contains("POSTGRES_DB: shop"));

    let settings = fs
        .read_file(Path::new("/out/shop/backend/shop/settings.py"))
        .unwrap();
    assert!(settings.contains("'ENGINE': 'django.db.backends.postgresql',"));
    assert!(settings.contains("'HOST': 'db',"));
    assert!(settings.contains("'PORT': 5432"));
    assert!(settings.contains("INSTALLED_APPS = APPS + THIRD_APPS"));
    assert!(settings.contains("STATIC_ROOT = '/app/static'"));
    assert!(settings.contains("WSGI_APPLICATION = 'backend.shop.wsgi.application'"));

    let wsgi = fs.read_file(Path::new("/out/shop/backend/shop/wsgi.py")).unwrap();
    assert!(wsgi.contains("'DJANGO_SETTINGS_MODULE', 'backend.shop.settings'"));
    let asgi = fs.read_file(Path::new("/out/shop/backend/shop/asgi.py")).unwrap();
    assert!(asgi.contains("'DJANGO_SETTINGS_MODULE', 'backend.shop.settings'"));
}

#[test]
fn first_run_applies_every_patch() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(postgres_answers()).unwrap();
    let report = service(&fs).assemble(&config, Path::new("/out")).unwrap();

    assert_eq!(report.patches.len(), 7);
    assert_eq!(report.applied_count(), 7);
}

#[test]
fn rerun_is_a_safe_no_op() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(postgres_answers()).unwrap();
    let svc = service(&fs);

    svc.assemble(&config, Path::new("/out")).unwrap();
    let snapshot: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| (p.clone(), fs.read_file(&p).unwrap()))
        .collect();

    let second = svc.assemble(&config, Path::new("/out")).unwrap();

    // Every patch short-circuits on its idempotence marker.
    assert!(second.all_already_applied());
    for patch in &second.patches {
        assert_eq!(patch.outcome, PatchOutcome::AlreadyApplied, "{}", patch.name);
    }

    // And nothing drifted on disk.
    for (path, content) in snapshot {
        assert_eq!(fs.read_file(&path).unwrap(), content, "{}", path.display());
    }
}

#[test]
fn generator_failure_does_not_stop_artifact_writes() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(sqlite_answers()).unwrap();
    let service = AssemblerService::new(
        Box::new(fs.clone()),
        Box::new(FakeGenerator::failing(fs.clone())),
    );

    let report = service.assemble(&config, Path::new("/out")).unwrap();

    // Artifacts are written unconditionally; patches find no targets.
    assert!(fs.exists(Path::new("/out/demo/docker-compose.yml")));
    assert!(fs.exists(Path::new("/out/demo/requirements.txt")));
    assert!(
        report
            .patches
            .iter()
            .all(|p| p.outcome == PatchOutcome::MissingTarget)
    );
}

#[test]
fn sqlite_config_gets_no_database_patches() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(sqlite_answers()).unwrap();
    assert_eq!(config.database(), DbBackend::Sqlite);

    let report = service(&fs).assemble(&config, Path::new("/out")).unwrap();
    let names: Vec<_> = report.patches.iter().map(|p| p.name).collect();
    assert!(!names.contains(&"db-engine"));
    assert!(!names.contains(&"db-connection"));
    assert_eq!(report.applied_count(), 5);
}

#[test]
fn requirements_manifest_lists_pins_in_order() {
    let fs = MemoryFilesystem::new();
    let config = ProjectConfig::from_answers(sqlite_answers()).unwrap();
    service(&fs).assemble(&config, Path::new("/out")).unwrap();

    let manifest = fs.read_file(Path::new("/out/demo/requirements.txt")).unwrap();
    let lines: Vec<_> = manifest.lines().collect();
    assert_eq!(lines.first(), Some(&"Django==5.1.5"));
    assert_eq!(lines.last(), Some(&"gunicorn==21.2.0"));
}
