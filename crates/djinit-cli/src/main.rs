//! # djinit CLI
//!
//! Containerised Django backend bootstrapper.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompt;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("djinit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    //
    //    Colour is disabled when stderr is not a TTY (same logic as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
