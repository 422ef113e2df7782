//! Issue module - drafts extracted from email and the records they become

use crate::{Category, DisplayId, IssueNote, IssueStatus, ReviewEntry};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal storage key for a persisted issue, based on UUIDv7
///
/// The display ID is what people read and type; the key is what the store
/// uses to address a row, and it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IssueKey(u128);

impl IssueKey {
    /// Generate a new UUIDv7-based key
    ///
    /// # Examples
    ///
    /// ```
    /// use draftwatch_domain::IssueKey;
    ///
    /// let key = IssueKey::new();
    /// assert!(key.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a key from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a key from its UUID string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid issue key: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for IssueKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for IssueKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

/// An issue extracted from email text, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIssueDraft {
    /// Display ID allocated from the category counters
    pub id: DisplayId,

    /// Job number (digits), possibly empty
    pub job_number: String,

    /// Category the issue was listed under
    pub category: Category,

    /// Issue text with the resolution note removed
    pub description: String,

    /// Status inferred from the issue text
    pub status: IssueStatus,

    /// Text found after the trailing dash, possibly empty
    pub resolution_notes: String,

    /// Team derived from the category
    pub assignee: String,

    /// Date of the extraction run
    pub date_reported: NaiveDate,

    /// Always empty for a fresh draft
    #[serde(default)]
    pub review_history: Vec<ReviewEntry>,
}

/// Who an import is attributed to when drafts are confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    /// Drafting squad responsible for the drawings
    pub squad: String,

    /// Person who confirmed the import
    pub uploaded_by: String,
}

impl Default for UploadMetadata {
    fn default() -> Self {
        Self {
            squad: String::new(),
            uploaded_by: "Unknown".to_string(),
        }
    }
}

/// A persisted drafting issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Storage key
    pub key: IssueKey,

    /// Display ID
    pub id: DisplayId,

    /// Job number (digits), possibly empty
    pub job_number: String,

    /// Category (immutable)
    pub category: Category,

    /// Issue text
    pub description: String,

    /// Current workflow status
    pub status: IssueStatus,

    /// Notes on how the issue was or will be resolved
    pub resolution_notes: String,

    /// Responsible team or person
    pub assignee: String,

    /// When the issue was reported
    pub date_reported: NaiveDate,

    /// Reviews in the order they were submitted
    #[serde(default)]
    pub review_history: Vec<ReviewEntry>,

    /// Drafting squad
    #[serde(default)]
    pub squad: String,

    /// Who imported the issue
    pub uploaded_by: String,

    /// Set when a review approves the fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_date: Option<NaiveDate>,

    /// Last time the status changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status_change: Option<DateTime<Utc>>,

    /// Comments added after import, oldest first
    #[serde(default)]
    pub notes: Vec<IssueNote>,
}

impl IssueRecord {
    /// Build a record from a confirmed draft
    pub fn from_draft(draft: ParsedIssueDraft, metadata: &UploadMetadata, key: IssueKey) -> Self {
        Self {
            key,
            id: draft.id,
            job_number: draft.job_number,
            category: draft.category,
            description: draft.description,
            status: draft.status,
            resolution_notes: draft.resolution_notes,
            assignee: draft.assignee,
            date_reported: draft.date_reported,
            review_history: draft.review_history,
            squad: metadata.squad.clone(),
            uploaded_by: metadata.uploaded_by.clone(),
            resolution_date: None,
            last_status_change: None,
            notes: Vec::new(),
        }
    }
}
