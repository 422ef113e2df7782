//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use draftwatch_domain::traits::{IssueQuery, IssueStore};
use draftwatch_domain::IssueRecord;
use draftwatch_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let records = query(args, store)?;
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}

fn query(args: ListArgs, store: &SqliteStore) -> Result<Vec<IssueRecord>> {
    let query = IssueQuery {
        category: args.category.map(Into::into),
        status: args.status.map(Into::into),
        job_number: args.job,
        squad: args.squad,
        search: args.search,
        limit: args.limit,
    };
    Ok(store.list_issues(&query)?)
}
