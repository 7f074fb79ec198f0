//! Interactive prompt sequence for `djinit new` without arguments.
//!
//! This is the input collaborator the core knows nothing about: it yields
//! six raw strings plus one menu choice as a [`RawAnswers`], and all
//! defaulting happens later in `ProjectConfig::from_answers`. The prompt
//! text shows the effective defaults so the user knows what blank means.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use djinit_core::domain::{DEFAULT_DB_PASSWORD, DEFAULT_PORT, RawAnswers, derive_slug};

use crate::error::{CliError, CliResult};

/// Run the full prompt sequence.
pub fn collect_answers() -> CliResult<RawAnswers> {
    let project_name = text("Project name")?;
    let slug = text("Project slug (blank to derive from the name)")?;
    let port = text(&format!("Exposed port (default {DEFAULT_PORT})"))?;

    let db_index = select("Database type", &["PostgreSQL", "SQLite"])?;
    let db_choice = if db_index == 0 { "1" } else { "2" };

    let (db_name, db_user, db_password) = if db_index == 0 {
        // Show the key blank answers will resolve to.
        let effective_slug = if slug.trim().is_empty() {
            derive_slug(project_name.trim())
        } else {
            slug.trim().to_string()
        };
        (
            text(&format!("Database name (default: {effective_slug})"))?,
            text(&format!("Database user (default: {effective_slug})"))?,
            text(&format!("Database password (default: {DEFAULT_DB_PASSWORD})"))?,
        )
    } else {
        (String::new(), String::new(), String::new())
    };

    Ok(RawAnswers {
        project_name,
        slug,
        port,
        db_choice: db_choice.into(),
        db_name,
        db_user,
        db_password,
    })
}

fn text(prompt: &str) -> CliResult<String> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(CliError::Cancelled)
        }
        Err(err) => Err(CliError::PromptFailed {
            message: err.to_string(),
        }),
    }
}

fn select(prompt: &str, items: &[&str]) -> CliResult<usize> {
    match Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
    {
        Ok(index) => Ok(index),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(CliError::Cancelled)
        }
        Err(err) => Err(CliError::PromptFailed {
            message: err.to_string(),
        }),
    }
}
