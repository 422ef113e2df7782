//! Review module - quality review of a fixed issue

use crate::{IssueRecord, IssueStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One review pass over an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    /// Who reviewed
    pub reviewer_name: String,

    /// Whether the fix was accepted
    pub approved: bool,

    /// Reviewer comments
    pub notes: String,

    /// Review date
    pub date: NaiveDate,

    /// Local wall-clock time, e.g. `3:45:12 PM`
    pub time: String,

    /// 1-based review pass number
    pub iteration: u32,
}

impl IssueRecord {
    /// Record a review and move the issue to its post-review status
    ///
    /// Approval marks the issue `Fixed` with today's resolution date; a
    /// rejection sends it back to `Needs Rework` and clears the resolution
    /// date. The entry's iteration is one past the current history length.
    pub fn apply_review(
        &mut self,
        approved: bool,
        notes: impl Into<String>,
        reviewer: impl Into<String>,
        now: DateTime<Local>,
    ) -> &ReviewEntry {
        let today = now.date_naive();
        let iteration = self.review_history.len() as u32 + 1;

        self.status = if approved {
            IssueStatus::Fixed
        } else {
            IssueStatus::NeedsRework
        };
        self.resolution_date = approved.then_some(today);
        self.last_status_change = Some(now.with_timezone(&Utc));

        self.review_history.push(ReviewEntry {
            reviewer_name: reviewer.into(),
            approved,
            notes: notes.into(),
            date: today,
            time: now.format("%-I:%M:%S %p").to_string(),
            iteration,
        });

        &self.review_history[self.review_history.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, DisplayId, IssueKey};
    use chrono::TimeZone;

    fn record() -> IssueRecord {
        IssueRecord {
            key: IssueKey::from_value(7),
            id: DisplayId::new(Category::ErectionDrawings, 4),
            job_number: "114520".to_string(),
            category: Category::ErectionDrawings,
            description: "Weld symbol missing".to_string(),
            status: IssueStatus::UnderReview,
            resolution_notes: String::new(),
            assignee: "Engineering Team".to_string(),
            date_reported: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            review_history: Vec::new(),
            squad: "Basuraj".to_string(),
            uploaded_by: "Unknown".to_string(),
            resolution_date: None,
            last_status_change: None,
            notes: Vec::new(),
        }
    }

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 14, hour, 45, 0).unwrap()
    }

    #[test]
    fn test_approval_marks_fixed() {
        let mut issue = record();
        let entry = issue.apply_review(true, "Matches structural requirements", "Quality Team", at(15));

        assert_eq!(entry.iteration, 1);
        assert_eq!(entry.time, "3:45:00 PM");
        assert_eq!(issue.status, IssueStatus::Fixed);
        assert_eq!(issue.resolution_date, NaiveDate::from_ymd_opt(2024, 1, 14));
        assert!(issue.last_status_change.is_some());
    }

    #[test]
    fn test_rejection_then_approval_increments_iteration() {
        let mut issue = record();
        issue.apply_review(false, "Dimensions still off", "Quality Team", at(9));
        assert_eq!(issue.status, IssueStatus::NeedsRework);
        assert!(issue.resolution_date.is_none());

        let entry = issue.apply_review(true, "", "Quality Team", at(10));
        assert_eq!(entry.iteration, 2);
        assert_eq!(issue.review_history.len(), 2);
        assert!(!issue.review_history[0].approved);
        assert!(issue.review_history[1].approved);
    }
}
