//! Delete command implementation.

use super::parse_display_ids;
use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use draftwatch_domain::traits::IssueStore;
use draftwatch_store::SqliteStore;
use tracing::info;

/// Execute the delete command.
pub fn execute_delete(args: DeleteArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let deleted = delete_issues(&args, store)?;
    println!("{}", formatter.bulk_result("Deleted", deleted));
    Ok(())
}

/// Delete the listed issues; all of them or, if any is missing, none.
pub(crate) fn delete_issues(args: &DeleteArgs, store: &mut SqliteStore) -> Result<usize> {
    let ids = parse_display_ids(&args.ids)?;
    if !args.yes {
        return Err(CliError::InvalidInput(format!(
            "Refusing to delete {} issue(s) without --yes",
            ids.len()
        )));
    }

    let deleted = store.delete_issues(&ids)?;
    info!("Deleted {} issues", deleted);
    Ok(deleted)
}
