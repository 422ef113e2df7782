//! Result types and warning messages for extraction

use draftwatch_domain::ParsedIssueDraft;
use serde::{Deserialize, Serialize};

/// Warning returned when the input is absent, empty or not text
pub const INVALID_CONTENT: &str = "Invalid email content";

/// Warning returned when no job number was supplied or found
pub const MISSING_JOB_NUMBER: &str = "Warning: No job number detected. Please enter manually.";

/// Warning returned when the scan produced no drafts
pub const NO_ISSUES_PARSED: &str = "No issues could be parsed. Please check the email format.";

/// Outcome of one parse
///
/// `errors` is advisory: drafts may be present alongside warnings, and the
/// caller decides whether any warning should block confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Drafts in the order their numbered items appeared
    pub issues: Vec<ParsedIssueDraft>,

    /// Warnings in the order they were raised
    pub errors: Vec<String>,

    /// Supplied or detected job number, possibly empty
    pub job_number: String,
}

impl ParseResult {
    /// A result carrying a single warning and nothing else
    pub(crate) fn rejected(reason: impl Into<String>) -> Self {
        Self {
            issues: Vec::new(),
            errors: vec![reason.into()],
            job_number: String::new(),
        }
    }

    /// Whether any warnings were raised
    pub fn has_warnings(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the job number is still missing
    pub fn needs_job_number(&self) -> bool {
        self.job_number.is_empty()
    }
}
