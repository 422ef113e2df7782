//! Command implementations.

pub mod delete;
pub mod edit;
pub mod list;
pub mod move_status;
pub mod note;
pub mod parse;
pub mod review;
pub mod show;

pub use self::delete::execute_delete;
pub use self::edit::execute_edit;
pub use self::list::execute_list;
pub use self::move_status::execute_move;
pub use self::note::execute_note;
pub use self::parse::execute_parse;
pub use self::review::execute_review;
pub use self::show::execute_show;

use crate::error::{CliError, Result};
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::{DisplayId, IssueRecord};
use draftwatch_store::SqliteStore;

/// Parse a display ID typed on the command line.
pub(crate) fn parse_display_id(raw: &str) -> Result<DisplayId> {
    DisplayId::parse(raw.trim().to_uppercase().as_str())
        .ok_or_else(|| CliError::InvalidInput(format!("'{}' is not a display ID like ERE-001", raw)))
}

/// Parse several display IDs, dropping repeats but keeping the given order.
pub(crate) fn parse_display_ids(raw: &[String]) -> Result<Vec<DisplayId>> {
    let mut ids: Vec<DisplayId> = Vec::with_capacity(raw.len());
    for id in raw {
        let id = parse_display_id(id)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Load a stored issue or fail with [`CliError::NotFound`].
pub(crate) fn fetch_issue(store: &SqliteStore, id: &DisplayId) -> Result<IssueRecord> {
    store
        .get_issue(id)?
        .ok_or_else(|| CliError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ids_are_normalized_and_deduplicated() {
        let raw = ["ere-1", "SHP-004", "ERE-001"].map(String::from);
        let ids: Vec<String> = parse_display_ids(&raw)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(ids, vec!["ERE-001", "SHP-004"]);
    }

    #[test]
    fn test_one_bad_id_fails_the_list() {
        let raw = ["ERE-001", "DIT-2024-005"].map(String::from);
        assert!(matches!(parse_display_ids(&raw), Err(CliError::InvalidInput(_))));
    }
}
