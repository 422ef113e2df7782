//! Review command implementation.

use super::{fetch_issue, parse_display_id};
use crate::cli::ReviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{DateTime, Local};
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::IssueRecord;
use draftwatch_store::SqliteStore;
use tracing::info;

/// Execute the review command.
pub fn execute_review(
    args: ReviewArgs,
    store: &mut SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let record = review(&args, store, config, Local::now())?;

    let verdict = if args.approve { "Approved" } else { "Rejected" };
    println!(
        "{}",
        formatter.success(&format!("{} {} ({})", verdict, record.id, record.status))
    );
    Ok(())
}

/// Record one review pass on a stored issue.
pub(crate) fn review(
    args: &ReviewArgs,
    store: &mut SqliteStore,
    config: &Config,
    now: DateTime<Local>,
) -> Result<IssueRecord> {
    let id = parse_display_id(&args.id)?;
    let mut record = fetch_issue(store, &id)?;

    let reviewer = match args.reviewer.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => config.defaults.reviewer.clone(),
    };

    let entry = record.apply_review(args.approve, args.notes.as_str(), reviewer, now);
    info!(
        "Review {} of {} by '{}': approved={}",
        entry.iteration, id, entry.reviewer_name, entry.approved
    );

    store.update_issue(&record)?;
    Ok(record)
}
