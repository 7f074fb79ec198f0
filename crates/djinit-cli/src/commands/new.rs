//! Implementation of the `djinit new` command.
//!
//! Responsibility: turn CLI flags or interactive prompts into a
//! `ProjectConfig`, call the core assembler service, and display results.
//! No business logic lives here.

use tracing::{debug, info, instrument};

use djinit_adapters::{DjangoAdminGenerator, LocalFilesystem};
use djinit_core::{
    application::AssemblerService,
    domain::{Artifact, DEFAULT_DB_CHOICE, DbBackend, PatchOutcome, ProjectConfig, RawAnswers},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `djinit new` command.
///
/// Dispatch sequence:
/// 1. Resolve raw answers (flags when a name was given, prompts otherwise)
/// 2. Construct the immutable `ProjectConfig`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute assembly via `AssemblerService`
/// 6. Print the run report and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Raw input, exactly as the collaborator produced it.
    let answers = resolve_answers(&args, &config)?;

    // 2. The one construction site; a blank name is the only fatal input.
    let project = ProjectConfig::from_answers(answers).map_err(|e| CliError::Core(e.into()))?;

    debug!(
        slug = project.slug(),
        port = project.port(),
        database = %project.database(),
        "Configuration resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&project, &args, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    let project_root = args.output.join(project.slug());
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project.project_name(),
            project_root.display(),
        ))?;
        for artifact in Artifact::ALL {
            output.info(&format!("  would write {artifact}"))?;
        }
        return Ok(());
    }

    // 5. Create adapters and assemble
    let service = AssemblerService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(DjangoAdminGenerator::new()),
    );

    output.header(&format!("Creating '{}'...", project.project_name()))?;
    info!(project = project.project_name(), path = %project_root.display(), "Assembly started");

    let report = service
        .assemble(&project, &args.output)
        .map_err(CliError::Core)?;

    info!(project = project.project_name(), "Assembly completed");

    // 6. Run report + next steps
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            CliError::Core(djinit_core::error::DjinitError::Internal {
                message: format!("failed to serialise run report: {e}"),
            })
        })?;
        println!("{json}");
        return Ok(());
    }

    for path in &report.artifacts {
        output.success(&format!("wrote {}", path.display()))?;
    }
    for patch in &report.patches {
        match patch.outcome {
            PatchOutcome::Applied => {
                output.success(&format!("patch {}: {}", patch.name, patch.outcome))?;
            }
            PatchOutcome::AlreadyApplied => {
                output.info(&format!("patch {}: {}", patch.name, patch.outcome))?;
            }
            PatchOutcome::MissingTarget | PatchOutcome::PatternAbsent => {
                output.warning(&format!("patch {}: {}", patch.name, patch.outcome))?;
            }
        }
    }

    output.success(&format!(
        "Project created at {}",
        report.project_root.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project.slug()))?;
        output.print("  docker compose up --build")?;
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Flags win when a name was given; otherwise the full prompt sequence
/// runs. Either way the result is raw strings — defaulting belongs to the
/// core.
fn resolve_answers(args: &NewArgs, config: &AppConfig) -> CliResult<RawAnswers> {
    match &args.name {
        Some(name) => Ok(RawAnswers {
            project_name: name.clone(),
            slug: args.slug.clone().unwrap_or_default(),
            port: args
                .port
                .clone()
                .or_else(|| config.defaults.port.clone())
                .unwrap_or_default(),
            db_choice: resolve_db_choice(args, config),
            db_name: args.db_name.clone().unwrap_or_default(),
            db_user: args.db_user.clone().unwrap_or_default(),
            db_password: args.db_password.clone().unwrap_or_default(),
        }),
        None => collect_interactive(),
    }
}

fn resolve_db_choice(args: &NewArgs, config: &AppConfig) -> String {
    if let Some(choice) = args.database {
        return choice.as_choice().into();
    }
    if let Some(db) = &config.defaults.database {
        let normalized = db.to_ascii_lowercase();
        return if normalized == "postgresql" || normalized == "postgres" {
            "1".into()
        } else {
            "2".into()
        };
    }
    DEFAULT_DB_CHOICE.into()
}

#[cfg(feature = "interactive")]
fn collect_interactive() -> CliResult<RawAnswers> {
    crate::prompt::collect_answers()
}

#[cfg(not(feature = "interactive"))]
fn collect_interactive() -> CliResult<RawAnswers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    project: &ProjectConfig,
    args: &NewArgs,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {}", project.project_name()))?;
    out.print(&format!("  Slug:     {}", project.slug()))?;
    out.print(&format!("  Port:     {}", project.port()))?;
    out.print(&format!("  Database: {}", project.database()))?;
    if project.database() == DbBackend::Postgresql {
        out.print(&format!("  DB name:  {}", project.db_name()))?;
        out.print(&format!("  DB user:  {}", project.db_user()))?;
    }
    out.print(&format!("  Location: {}", args.output.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
