//! Show command implementation.

use super::{fetch_issue, parse_display_id};
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use draftwatch_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let id = parse_display_id(&args.id)?;
    let record = fetch_issue(store, &id)?;

    println!("{}", formatter.format_record(&record)?);
    Ok(())
}
