//! Note command implementation.

use super::{fetch_issue, parse_display_id};
use crate::cli::NoteArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::{DateTime, Utc};
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::IssueNote;
use draftwatch_store::SqliteStore;

/// Execute the note command.
pub fn execute_note(
    args: NoteArgs,
    store: &mut SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let id = parse_display_id(&args.id)?;
    let note = add_note(&args, store, config, Utc::now())?;
    println!("{}", formatter.success(&format!("Added note {} to {}", note.id, id)));
    Ok(())
}

/// Attach a note to a stored issue.
pub(crate) fn add_note(
    args: &NoteArgs,
    store: &mut SqliteStore,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<IssueNote> {
    let id = parse_display_id(&args.id)?;
    let mut record = fetch_issue(store, &id)?;

    let author = match args.author.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => config.defaults.author.clone(),
    };

    let note = record
        .add_note(&args.content, author, now)
        .cloned()
        .ok_or_else(|| CliError::InvalidInput("Note is empty".to_string()))?;

    store.update_issue(&record)?;
    Ok(note)
}
