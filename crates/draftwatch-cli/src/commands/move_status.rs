//! Move command implementation.

use super::{fetch_issue, parse_display_ids};
use crate::cli::MoveArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{DateTime, Local};
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::{IssueRecord, IssueStatus};
use draftwatch_store::SqliteStore;
use tracing::info;

/// Execute the move command.
pub fn execute_move(args: MoveArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let status: IssueStatus = args.to.into();
    let moved = move_issues(&args.ids, status, store, Local::now())?;
    println!(
        "{}",
        formatter.success(&format!("Moved {} issue(s) to {}", moved.len(), status))
    );
    Ok(())
}

/// Move every listed issue to `status`; nothing is written if any is missing.
pub(crate) fn move_issues(
    raw_ids: &[String],
    status: IssueStatus,
    store: &mut SqliteStore,
    now: DateTime<Local>,
) -> Result<Vec<IssueRecord>> {
    let ids = parse_display_ids(raw_ids)?;
    let mut records = Vec::with_capacity(ids.len());
    for id in &ids {
        records.push(fetch_issue(store, id)?);
    }

    for record in &mut records {
        record.set_status(status, now);
    }
    store.update_batch(&records)?;

    info!("Moved {} issues to '{}'", records.len(), status);
    Ok(records)
}
