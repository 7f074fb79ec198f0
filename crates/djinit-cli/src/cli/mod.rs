//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "djinit",
    bin_name = "djinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Containerised Django backend bootstrapper",
    long_about = "djinit collects a handful of configuration choices, runs \
                  django-admin startproject, and wires the result into a \
                  ready-to-run docker compose setup.",
    after_help = "EXAMPLES:\n\
        \x20 djinit new                               # fully interactive\n\
        \x20 djinit new \"My Shop\" --db sqlite --yes\n\
        \x20 djinit new Shop --slug shop --port 9000 --db postgresql --yes\n\
        \x20 djinit completions bash > /usr/share/bash-completion/completions/djinit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap a new backend project.
    #[command(
        visible_alias = "n",
        about = "Bootstrap a new backend project",
        after_help = "EXAMPLES:\n\
            \x20 djinit new                          # prompt for everything\n\
            \x20 djinit new Demo --db sqlite --yes\n\
            \x20 djinit new Shop --port 9000 --db postgresql --db-user shop --yes"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 djinit completions bash > ~/.local/share/bash-completion/completions/djinit\n\
            \x20 djinit completions zsh  > ~/.zfunc/_djinit\n\
            \x20 djinit completions fish > ~/.config/fish/completions/djinit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `djinit new`.
///
/// Every omitted value falls back the same way the interactive prompts do:
/// slug derives from the name, the port and database credentials take
/// their fixed defaults.  With no NAME at all, the full prompt sequence
/// runs instead.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Human-readable project name.  Omit to be prompted for everything.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Filesystem- and identifier-safe project key.
    #[arg(
        short = 's',
        long = "slug",
        value_name = "SLUG",
        help = "Project slug (default: derived from name)"
    )]
    pub slug: Option<String>,

    /// Port the served application is published on.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Exposed port (default: 8000)"
    )]
    pub port: Option<String>,

    /// Database backend.
    #[arg(
        short = 'd',
        long = "db",
        value_name = "DATABASE",
        value_enum,
        help = "Database backend (default: postgresql)"
    )]
    pub database: Option<DatabaseChoice>,

    /// Database name (postgresql only).
    #[arg(long = "db-name", value_name = "NAME", help = "Database name (default: slug)")]
    pub db_name: Option<String>,

    /// Database user (postgresql only).
    #[arg(long = "db-user", value_name = "USER", help = "Database user (default: slug)")]
    pub db_user: Option<String>,

    /// Database password (postgresql only).
    #[arg(
        long = "db-password",
        value_name = "PASSWORD",
        help = "Database password (default: password)"
    )]
    pub db_password: Option<String>,

    /// Directory the project root is created under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `djinit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseChoice {
    /// Also accepted as `postgres`.
    #[value(alias = "postgres")]
    Postgresql,
    Sqlite,
}

impl DatabaseChoice {
    /// The raw menu choice the core resolves: `"1"` selects PostgreSQL,
    /// anything else SQLite.
    pub fn as_choice(&self) -> &'static str {
        match self {
            Self::Postgresql => "1",
            Self::Sqlite => "2",
        }
    }
}

impl std::fmt::Display for DatabaseChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgresql => write!(f, "postgresql"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
