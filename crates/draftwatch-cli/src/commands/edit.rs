//! Edit command implementation.

use super::{fetch_issue, parse_display_id};
use crate::cli::EditArgs;
use crate::error::Result;
use crate::output::Formatter;
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::{IssueEdit, IssueRecord};
use draftwatch_store::SqliteStore;

/// Execute the edit command.
pub fn execute_edit(args: EditArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let (record, changed) = edit_issue(args, store)?;
    if changed {
        println!("{}", formatter.success(&format!("Updated {}", record.id)));
    } else {
        println!("{}", formatter.info(&format!("{} already has those values", record.id)));
    }
    Ok(())
}

/// Apply the requested field changes; the store is only written when
/// something changed.
pub(crate) fn edit_issue(args: EditArgs, store: &mut SqliteStore) -> Result<(IssueRecord, bool)> {
    let id = parse_display_id(&args.id)?;
    let mut record = fetch_issue(store, &id)?;

    let edit = IssueEdit {
        job_number: args.job,
        description: args.description,
        resolution_notes: args.resolution_notes,
        assignee: args.assignee,
        squad: args.squad,
    };

    let changed = record.apply_edit(&edit);
    if changed {
        store.update_issue(&record)?;
    }
    Ok((record, changed))
}
