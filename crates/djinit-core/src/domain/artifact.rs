//! Artifact rendering: the text files djinit produces wholesale.
//!
//! Every renderer is a pure function of the [`ProjectConfig`] — no
//! filesystem access, no clock, no randomness. Identical input yields
//! byte-identical output; writing is the assembler's responsibility.
//!
//! The compose file is the one artifact that branches *structurally* on
//! the database backend: PostgreSQL gets three services and a named
//! volume, SQLite a single service. These are two distinct templates,
//! not one template with substituted parameters.

use crate::domain::config::{DbBackend, ProjectConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated text file with a fixed location under the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
    Requirements,
    Dockerfile,
    Compose,
    Readme,
}

impl Artifact {
    /// Emission order: the order in which the assembler writes them.
    pub const ALL: [Artifact; 4] = [
        Artifact::Requirements,
        Artifact::Compose,
        Artifact::Dockerfile,
        Artifact::Readme,
    ];

    /// Path of the artifact relative to the project root.
    pub const fn relative_path(&self) -> &'static str {
        match self {
            Self::Requirements => "requirements.txt",
            Self::Dockerfile => "Dockerfile",
            Self::Compose => "docker-compose.yml",
            Self::Readme => "README.md",
        }
    }

    /// Render the artifact text for the given configuration.
    pub fn render(&self, config: &ProjectConfig) -> String {
        match self {
            Self::Requirements => render_requirements(config),
            Self::Dockerfile => render_dockerfile(config),
            Self::Compose => render_compose(config),
            Self::Readme => render_readme(config),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

/// One `package==version` per line, in the fixed declared order.
fn render_requirements(config: &ProjectConfig) -> String {
    config
        .requirements()
        .iter()
        .map(|(package, version)| format!("{package}=={version}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Container build file. Identical structure for both backends;
/// parameterised by port and slug only.
fn render_dockerfile(config: &ProjectConfig) -> String {
    let port = config.port();
    let slug = config.slug();
    format!(
        r#"FROM python:3.11

WORKDIR /app

# Install system build dependencies
RUN apt-get update && apt-get install -y \
    build-essential \
    && rm -rf /var/lib/apt/lists/*

# Copy requirements and install Python dependencies
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

# Copy only the backend
COPY backend /app/backend

WORKDIR /app/backend

RUN python manage.py collectstatic --noinput

EXPOSE {port}

CMD ["gunicorn", "backend.{slug}.wsgi:application", "--bind", "0.0.0.0:{port}"]
"#
    )
}

fn render_compose(config: &ProjectConfig) -> String {
    match config.database() {
        DbBackend::Postgresql => render_compose_postgres(config),
        DbBackend::Sqlite => render_compose_sqlite(config),
    }
}

/// Three services: the application, an auxiliary interactive shell, and
/// the database itself with a persistent named volume.
fn render_compose_postgres(config: &ProjectConfig) -> String {
    let slug = config.slug();
    let port = config.port();
    format!(
        r#"version: "3.8"

services:
  web:
    build: .
    command: bash -c "python manage.py collectstatic --noinput && python manage.py migrate && gunicorn {slug}.wsgi:application --bind 0.0.0.0:{port}"
    volumes:
      - ./backend:/app/backend
      - ./static:/app/static
    ports:
      - "{port}:{port}"
    environment:
      - PYTHONUNBUFFERED=1
      - DJANGO_SETTINGS_MODULE={slug}.settings
    depends_on:
      - db
  shell:
    build: .
    volumes:
      - .:/app
    environment:
      - DJANGO_SETTINGS_MODULE={slug}.settings
    command: ["python", "manage.py", "shell_plus"]

  db:
    image: postgres:13
    environment:
      POSTGRES_DB: {db_name}
      POSTGRES_USER: {db_user}
      POSTGRES_PASSWORD: {db_password}
    volumes:
      - postgres_data:/var/lib/postgresql/data/

volumes:
  postgres_data:
"#,
        db_name = config.db_name(),
        db_user = config.db_user(),
        db_password = config.db_password(),
    )
}

/// Single application service: no database dependency, no named volume.
fn render_compose_sqlite(config: &ProjectConfig) -> String {
    let slug = config.slug();
    let port = config.port();
    format!(
        r#"version: "3.8"

services:
  web:
    build: .
    command: gunicorn {slug}.wsgi:application --bind 0.0.0.0:{port}
    volumes:
      - .:/app
    ports:
      - "{port}:{port}"
"#
    )
}

/// Fixed-shape summary of the chosen configuration.
fn render_readme(config: &ProjectConfig) -> String {
    format!(
        r#"# {project_name}

Bootstrapped backend service skeleton.

## Configuration

- **Project name:** {project_name}
- **Slug:** {slug}
- **Port:** {port}
- **Database:** {database}
"#,
        project_name = config.project_name(),
        slug = config.slug(),
        port = config.port(),
        database = config.database(),
    )
}
