//! Status module - where an issue sits in the review workflow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a drafting issue
///
/// New issues start as `New`; the review workflow moves them to `Fixed` or
/// `NeedsRework`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    /// Not yet looked at
    #[default]
    #[serde(rename = "New")]
    New,

    /// A fix is being worked on
    #[serde(rename = "In Progress")]
    InProgress,

    /// Waiting on a reviewer
    #[serde(rename = "Under Review")]
    UnderReview,

    /// Review rejected the fix
    #[serde(rename = "Needs Rework")]
    NeedsRework,

    /// Fix done and accepted
    #[serde(rename = "Fixed")]
    Fixed,

    /// The drawing cannot be changed as requested
    #[serde(rename = "Cannot Change")]
    CannotChange,
}

impl IssueStatus {
    /// All statuses, in board column order
    pub const ALL: [IssueStatus; 6] = [
        IssueStatus::New,
        IssueStatus::InProgress,
        IssueStatus::UnderReview,
        IssueStatus::NeedsRework,
        IssueStatus::Fixed,
        IssueStatus::CannotChange,
    ];

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::New => "New",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::UnderReview => "Under Review",
            IssueStatus::NeedsRework => "Needs Rework",
            IssueStatus::Fixed => "Fixed",
            IssueStatus::CannotChange => "Cannot Change",
        }
    }

    /// Parse a status from its name, ignoring case and separators
    ///
    /// Accepts `"Under Review"`, `"under-review"` and `"under_review"` alike.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_ascii_lowercase() == normalized)
    }

    /// Whether the issue no longer needs drafting work
    pub fn is_closed(&self) -> bool {
        matches!(self, IssueStatus::Fixed | IssueStatus::CannotChange)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_new() {
        assert_eq!(IssueStatus::default(), IssueStatus::New);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(IssueStatus::parse("Under Review"), Some(IssueStatus::UnderReview));
        assert_eq!(IssueStatus::parse("needs-rework"), Some(IssueStatus::NeedsRework));
        assert_eq!(IssueStatus::parse("cannot_change"), Some(IssueStatus::CannotChange));
        assert_eq!(IssueStatus::parse("closed"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: IssueStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IssueStatus::InProgress);
    }

    #[test]
    fn test_closed_statuses() {
        assert!(IssueStatus::Fixed.is_closed());
        assert!(IssueStatus::CannotChange.is_closed());
        assert!(!IssueStatus::NeedsRework.is_closed());
    }
}
