//! Line scanner that turns pasted email text into issue drafts

use crate::config::ExtractorConfig;
use crate::counters::CategoryCounters;
use crate::patterns::{
    detect_category, detect_job_number, ends_description, infer_status, numbered_item,
    split_resolution_notes,
};
use crate::types::{ParseResult, INVALID_CONTENT, MISSING_JOB_NUMBER, NO_ISSUES_PARSED};
use chrono::NaiveDate;
use draftwatch_domain::{Category, ParsedIssueDraft};
use tracing::debug;

/// Parse email text into issue drafts with the default configuration
///
/// `job_number_hint`, when present and non-empty, is used instead of
/// detection. Display IDs are drawn from `counters`; `today` becomes every
/// draft's `date_reported`. This never fails: problems show up as warnings
/// in [`ParseResult::errors`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use draftwatch_extractor::{parse_email_content, CategoryCounters};
///
/// let mut counters = CategoryCounters::new();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let result = parse_email_content(
///     Some("Shop Drawings\n1. Unclear callout."),
///     Some("113980"),
///     &mut counters,
///     today,
/// );
///
/// assert_eq!(result.issues.len(), 1);
/// assert_eq!(result.issues[0].id.to_string(), "SHD-001");
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_email_content(
    content: Option<&str>,
    job_number_hint: Option<&str>,
    counters: &mut CategoryCounters,
    today: NaiveDate,
) -> ParseResult {
    parse_with_config(
        content,
        job_number_hint,
        counters,
        today,
        &ExtractorConfig::default(),
    )
}

/// Parse email text into issue drafts
pub(crate) fn parse_with_config(
    content: Option<&str>,
    job_number_hint: Option<&str>,
    counters: &mut CategoryCounters,
    today: NaiveDate,
    config: &ExtractorConfig,
) -> ParseResult {
    let content = match content {
        Some(text) if !text.is_empty() => text,
        _ => return ParseResult::rejected(INVALID_CONTENT),
    };

    let length = content.chars().count();
    if length > config.max_text_length {
        return ParseResult::rejected(format!(
            "Email content too long: {} chars (max: {})",
            length, config.max_text_length
        ));
    }

    let lines = split_lines(content);
    let mut errors = Vec::new();

    let job_number = match job_number_hint.filter(|hint| !hint.is_empty()) {
        Some(hint) => hint.to_string(),
        None => detect_job_number(content).unwrap_or_default().to_string(),
    };
    if job_number.is_empty() && config.warn_missing_job_number {
        errors.push(MISSING_JOB_NUMBER.to_string());
    }

    let mut current_category: Option<Category> = None;
    let mut issues = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        // A header only switches state; the same line may still be an item.
        if let Some(category) = detect_category(line) {
            current_category = Some(category);
        }

        let Some(category) = current_category else {
            continue;
        };
        let Some(head) = numbered_item(line) else {
            continue;
        };

        let text = collect_description(head, &lines[idx + 1..], &config.separator_prefix);
        let status = infer_status(&text);
        let (description, resolution_notes) = split_resolution_notes(&text);
        let Some(id) = counters.allocate(category) else {
            errors.push(format!(
                "No display IDs left for {}; item skipped: {}",
                category.prefix(),
                description
            ));
            continue;
        };

        debug!("Extracted {} ({}) as {}", id, category, status);

        issues.push(ParsedIssueDraft {
            id,
            job_number: job_number.clone(),
            category,
            description,
            status,
            resolution_notes,
            assignee: category.assignee().to_string(),
            date_reported: today,
            review_history: Vec::new(),
        });
    }

    if issues.is_empty() {
        errors.push(NO_ISSUES_PARSED.to_string());
    }

    ParseResult {
        issues,
        errors,
        job_number,
    }
}

/// Trimmed, non-empty lines in the order they appear
fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Join an item's first line with the continuation lines below it
///
/// Continuation stops at the next numbered item or at a line that looks like
/// a category header. Separator lines are skipped.
fn collect_description(head: &str, rest: &[&str], separator_prefix: &str) -> String {
    let mut description = head.to_string();
    for line in rest.iter().take_while(|line| !ends_description(line)) {
        if line.starts_with(separator_prefix) {
            continue;
        }
        description.push(' ');
        description.push_str(line);
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        let lines = split_lines("  Shipper \r\n\n\t1. Short count\n   \n");
        assert_eq!(lines, vec!["Shipper", "1. Short count"]);
    }

    #[test]
    fn test_collect_description_stops_at_next_item() {
        let rest = ["see grid B", "2. Next"];
        assert_eq!(collect_description("Bolt grade", &rest, "--"), "Bolt grade see grid B");
    }

    #[test]
    fn test_collect_description_stops_at_header() {
        let rest = ["continued", "Shop Drawings", "more"];
        assert_eq!(collect_description("Weld", &rest, "--"), "Weld continued");
    }

    #[test]
    fn test_collect_description_skips_separators() {
        let rest = ["-----", "after rule", "-- signature"];
        assert_eq!(collect_description("Anchor", &rest, "--"), "Anchor after rule");
    }

    #[test]
    fn test_custom_separator_prefix() {
        let rest = ["==========", "line two"];
        assert_eq!(collect_description("Plate", &rest, "=="), "Plate line two");
    }

    #[test]
    fn test_empty_string_is_invalid() {
        let mut counters = CategoryCounters::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = parse_email_content(Some(""), None, &mut counters, today);
        assert_eq!(result.errors, vec![INVALID_CONTENT.to_string()]);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let mut counters = CategoryCounters::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = ExtractorConfig {
            max_text_length: 10,
            ..ExtractorConfig::default()
        };
        let result = parse_with_config(
            Some("Shipper\n1. Too long to accept"),
            None,
            &mut counters,
            today,
            &config,
        );
        assert!(result.issues.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Email content too long"));
        assert_eq!(counters, CategoryCounters::new());
    }

    #[test]
    fn test_missing_job_warning_can_be_disabled() {
        let mut counters = CategoryCounters::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = parse_with_config(
            Some("Shipper\n1. Short count"),
            None,
            &mut counters,
            today,
            &ExtractorConfig::lenient(),
        );
        assert!(result.errors.is_empty());
        assert_eq!(result.issues.len(), 1);
    }
}
