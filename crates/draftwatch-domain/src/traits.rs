//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Category, DisplayId, IssueRecord, IssueStatus, ParsedIssueDraft, UploadMetadata};

/// Trait for storing and retrieving drafting issues
///
/// Implemented by the infrastructure layer (draftwatch-store)
pub trait IssueStore {
    /// Error type for store operations
    type Error;

    /// Every display ID the store knows about, used to seed category counters
    ///
    /// Values are returned as stored; callers ignore any that are malformed.
    fn known_display_ids(&self) -> Result<Vec<String>, Self::Error>;

    /// Persist confirmed drafts as one batch
    ///
    /// Either every draft is stored or none is.
    fn create_batch(
        &mut self,
        drafts: Vec<ParsedIssueDraft>,
        metadata: &UploadMetadata,
    ) -> Result<Vec<IssueRecord>, Self::Error>;

    /// Get an issue by display ID
    fn get_issue(&self, id: &DisplayId) -> Result<Option<IssueRecord>, Self::Error>;

    /// Query issues matching criteria
    fn list_issues(&self, query: &IssueQuery) -> Result<Vec<IssueRecord>, Self::Error>;

    /// Replace a stored issue, addressed by its key
    fn update_issue(&mut self, record: &IssueRecord) -> Result<(), Self::Error>;

    /// Replace several stored issues at once
    ///
    /// Either every record is written or none is.
    fn update_batch(&mut self, records: &[IssueRecord]) -> Result<(), Self::Error>;

    /// Delete issues by display ID; returns how many were removed
    ///
    /// Either every listed issue is deleted or, if any is missing, none is.
    fn delete_issues(&mut self, ids: &[DisplayId]) -> Result<usize, Self::Error>;
}

/// Query criteria for retrieving issues
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    /// Filter by category
    pub category: Option<Category>,

    /// Filter by status
    pub status: Option<IssueStatus>,

    /// Filter by job number
    pub job_number: Option<String>,

    /// Filter by drafting squad
    pub squad: Option<String>,

    /// Text search over description (case-insensitive), job number and
    /// display ID (case-insensitive); an empty term matches everything
    pub search: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}
