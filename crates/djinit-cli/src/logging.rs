//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `djinit-core`
//! only *emits* spans and events — it never touches subscribers.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
/// Returns an error if the subscriber could not be registered.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise build our own filter string so each crate gets
    // the same level as the top-level filter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "djinit={level},djinit_core={level},djinit_adapters={level}",
        ))
    });

    // Detect colour support via the stdlib (stable since 1.70).
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // `try_init` returns an error instead of panicking if a subscriber is
    // already set.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
