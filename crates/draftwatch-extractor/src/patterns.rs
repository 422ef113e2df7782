//! Keyword and pattern tables used by the line scanner
//!
//! Each table is an ordered list; the first entry that matches wins, so
//! order is part of the behaviour.

use draftwatch_domain::{Category, IssueStatus};
use regex::Regex;
use std::sync::LazyLock;

/// Job number patterns, tried in order against the raw email text
pub static JOB_NUMBER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)job\s*#?\s*([0-9]+)",
        r"(?i)project\s*#?\s*([0-9]+)",
        r"(?i)job\s*number:?\s*([0-9]+)",
        // Bare 6-digit number as a last resort; ASCII digits and boundaries only
        r"(?-u:\b)([0-9]{6})(?-u:\b)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Lowercase header keywords and the category each selects
pub const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("erection drawings", Category::ErectionDrawings),
    ("erection", Category::ErectionDrawings),
    ("shipper", Category::Shipper),
    ("ship", Category::Shipper),
    ("shop drawings", Category::ShopDrawings),
    ("shop", Category::ShopDrawings),
];

/// Status cues, highest priority first
pub static STATUS_RULES: LazyLock<Vec<(Regex, IssueStatus)>> = LazyLock::new(|| {
    [
        (r"(?i)cannot\s+change|cannot\s+show|not\s+possible", IssueStatus::CannotChange),
        (r"(?i)fixed|completed|done|resolved", IssueStatus::Fixed),
        (r"(?i)will\s+review|under\s+review|reviewing", IssueStatus::UnderReview),
        (r"(?i)will\s+fix|in\s+progress|working", IssueStatus::InProgress),
        (r"(?i)needs?\s+rework|rejected|redo", IssueStatus::NeedsRework),
    ]
    .into_iter()
    .map(|(p, status)| (Regex::new(p).unwrap(), status))
    .collect()
});

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s*(.+)").unwrap());

static NUMBERED_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+[.)]").unwrap());

/// First job number found in `text`, trying each pattern in turn
pub fn detect_job_number(text: &str) -> Option<&str> {
    JOB_NUMBER_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Category named by a header line, if any keyword occurs in it
pub fn detect_category(line: &str) -> Option<Category> {
    let lower = line.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, category)| category)
}

/// Text of a numbered list item (`1. text` or `2) text`)
pub fn numbered_item(line: &str) -> Option<&str> {
    NUMBERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a line ends the description of the item above it
pub fn ends_description(line: &str) -> bool {
    if NUMBERED_PREFIX.is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    lower.contains("drawings") || lower.contains("shipper")
}

/// Status implied by the wording of a description
pub fn infer_status(description: &str) -> IssueStatus {
    STATUS_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(description))
        .map(|&(_, status)| status)
        .unwrap_or_default()
}

/// Split a description at its last dash into `(description, resolution_notes)`
///
/// Only a dash (`-` or `–`) with text after it counts. The last such dash
/// wins, which mis-splits descriptions that carry an inner dash of their own,
/// such as `45'-6"`. Without a dash the description is returned as is and
/// the notes are empty.
pub fn split_resolution_notes(description: &str) -> (String, String) {
    let split = description
        .char_indices()
        .filter(|&(_, c)| c == '-' || c == '–')
        .map(|(start, c)| (start, start + c.len_utf8()))
        .filter(|&(_, end)| end < description.len())
        .last();

    match split {
        Some((start, end)) => (
            description[..start].trim().to_string(),
            description[end..].trim().to_string(),
        ),
        None => (description.to_string(), String::new()),
    }
}
