//! Note module - free-form comments on a stored issue

use crate::IssueRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to an issue after import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNote {
    /// 1-based, unique within the issue
    pub id: u32,

    /// Note text, trimmed
    pub content: String,

    /// When the note was added
    pub timestamp: DateTime<Utc>,

    /// Who added it
    pub author: String,
}

impl IssueRecord {
    /// Append a note and return it
    ///
    /// The content is trimmed; blank content adds nothing and returns `None`.
    /// The new note's id is one past the highest id already present.
    pub fn add_note(
        &mut self,
        content: &str,
        author: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Option<&IssueNote> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let id = self.notes.iter().map(|n| n.id).max().unwrap_or(0).saturating_add(1);
        self.notes.push(IssueNote {
            id,
            content: content.to_string(),
            timestamp: now,
            author: author.into(),
        });
        self.notes.last()
    }
}
