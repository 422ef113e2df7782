//! Edit module - status moves and field edits on a stored issue

use crate::{IssueRecord, IssueStatus};
use chrono::{DateTime, Local, Utc};

/// Field changes for an issue; `None` leaves a field as it is
///
/// Category and display ID are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueEdit {
    /// New job number
    pub job_number: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New resolution notes
    pub resolution_notes: Option<String>,

    /// New assignee
    pub assignee: Option<String>,

    /// New squad
    pub squad: Option<String>,
}

impl IssueEdit {
    /// Whether the edit changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl IssueRecord {
    /// Move the issue to `status`
    ///
    /// Moving to `Fixed` sets the resolution date to today; any other move
    /// keeps the current resolution date. The status-change time is stamped
    /// either way.
    pub fn set_status(&mut self, status: IssueStatus, now: DateTime<Local>) {
        self.status = status;
        if status == IssueStatus::Fixed {
            self.resolution_date = Some(now.date_naive());
        }
        self.last_status_change = Some(now.with_timezone(&Utc));
    }

    /// Apply field changes; returns whether any field actually changed
    pub fn apply_edit(&mut self, edit: &IssueEdit) -> bool {
        let mut changed = false;
        let fields = [
            (&mut self.job_number, &edit.job_number),
            (&mut self.description, &edit.description),
            (&mut self.resolution_notes, &edit.resolution_notes),
            (&mut self.assignee, &edit.assignee),
            (&mut self.squad, &edit.squad),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if *field != *value {
                    field.clone_from(value);
                    changed = true;
                }
            }
        }
        changed
    }
}
