//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use draftwatch_domain::{IssueRecord, IssueStatus, ParsedIssueDraft};
use draftwatch_extractor::ParseResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const DESCRIPTION_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the preview of a parse.
    pub fn format_parse_result(&self, result: &ParseResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_drafts_table(result)),
            OutputFormat::Quiet => Ok(join_ids(result.issues.iter().map(|d| d.id.to_string()))),
        }
    }

    /// Format stored issues.
    pub fn format_records(&self, records: &[IssueRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(join_ids(records.iter().map(|r| r.id.to_string()))),
        }
    }

    /// Format one stored issue in full.
    pub fn format_record(&self, record: &IssueRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_detail(record)),
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    fn format_drafts_table(&self, result: &ParseResult) -> String {
        let job = if result.job_number.is_empty() {
            self.colorize("(none)", "yellow")
        } else {
            result.job_number.clone()
        };
        let heading = format!("Job number: {}", job);

        if result.issues.is_empty() {
            return format!("{}\n{}", heading, self.colorize("No issues extracted.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Category", "Status", "Description", "Resolution Notes", "Assignee"]);

        for draft in &result.issues {
            builder.push_record(self.draft_row(draft));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", heading, table)
    }

    fn draft_row(&self, draft: &ParsedIssueDraft) -> Vec<String> {
        vec![
            draft.id.to_string(),
            draft.category.to_string(),
            self.status(draft.status),
            truncate(&draft.description, DESCRIPTION_WIDTH),
            truncate(&draft.resolution_notes, DESCRIPTION_WIDTH),
            draft.assignee.clone(),
        ]
    }

    fn format_records_table(&self, records: &[IssueRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No issues found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Job", "Category", "Status", "Description", "Assignee", "Reported", "Reviews"]);

        for record in records {
            builder.push_record(vec![
                record.id.to_string(),
                record.job_number.clone(),
                record.category.to_string(),
                self.status(record.status),
                truncate(&record.description, DESCRIPTION_WIDTH),
                record.assignee.clone(),
                record.date_reported.to_string(),
                record.review_history.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_record_detail(&self, record: &IssueRecord) -> String {
        let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

        let mut builder = Builder::default();
        let fields = [
            ("ID", record.id.to_string()),
            ("Job", record.job_number.clone()),
            ("Category", record.category.to_string()),
            ("Status", self.status(record.status)),
            ("Description", record.description.clone()),
            ("Resolution Notes", record.resolution_notes.clone()),
            ("Assignee", record.assignee.clone()),
            ("Squad", record.squad.clone()),
            ("Uploaded By", record.uploaded_by.clone()),
            ("Reported", record.date_reported.to_string()),
            ("Resolved", optional(record.resolution_date.map(|d| d.to_string()))),
            ("Last Change", optional(record.last_status_change.map(|t| t.to_rfc3339()))),
        ];
        for (name, value) in fields {
            builder.push_record([name.to_string(), value]);
        }
        let mut details = builder.build();
        details.with(Style::rounded());

        format!(
            "{}\n{}\n{}",
            details,
            self.format_reviews(record),
            self.format_notes(record)
        )
    }

    fn format_reviews(&self, record: &IssueRecord) -> String {
        if record.review_history.is_empty() {
            return self.info("No reviews yet.");
        }

        let mut reviews = Builder::default();
        reviews.push_record(["#", "Reviewer", "Verdict", "Date", "Time", "Notes"]);
        for entry in &record.review_history {
            let verdict = if entry.approved {
                self.colorize("approved", "green")
            } else {
                self.colorize("rejected", "red")
            };
            reviews.push_record(vec![
                entry.iteration.to_string(),
                entry.reviewer_name.clone(),
                verdict,
                entry.date.to_string(),
                entry.time.clone(),
                entry.notes.clone(),
            ]);
        }
        let mut reviews = reviews.build();
        reviews
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        reviews.to_string()
    }

    fn format_notes(&self, record: &IssueRecord) -> String {
        if record.notes.is_empty() {
            return self.info("No notes.");
        }

        let mut notes = Builder::default();
        notes.push_record(["#", "Author", "When", "Note"]);
        for note in &record.notes {
            notes.push_record(vec![
                note.id.to_string(),
                note.author.clone(),
                note.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                note.content.clone(),
            ]);
        }
        let mut notes = notes.build();
        notes
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        notes.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} issue(s)", operation, count))
    }

    /// Status name, colored by how far along the workflow it is.
    fn status(&self, status: IssueStatus) -> String {
        let color = match status {
            IssueStatus::New => "cyan",
            IssueStatus::InProgress | IssueStatus::UnderReview => "blue",
            IssueStatus::NeedsRework => "red",
            IssueStatus::Fixed => "green",
            IssueStatus::CannotChange => "magenta",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_ids(ids: impl Iterator<Item = String>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

/// Shorten text to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
