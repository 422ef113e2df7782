//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        parse_email_content, CategoryCounters, ExtractorConfig, FixedClock, IssueExtractor,
        ParseResult, INVALID_CONTENT, MISSING_JOB_NUMBER, NO_ISSUES_PARSED,
    };
    use chrono::NaiveDate;
    use draftwatch_domain::{Category, IssueStatus};
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()
    }

    fn parse(content: &str, hint: Option<&str>, seeds: &[&str]) -> ParseResult {
        let mut counters = CategoryCounters::seeded(seeds);
        parse_email_content(Some(content), hint, &mut counters, today())
    }

    #[test]
    fn test_two_category_email() {
        let email = "Erection Drawings\n\
                     1. Beam B3 depth wrong - Corrected to 21in per calc, fixed.\n\
                     Shipper\n\
                     1. BOM count mismatch, will review with vendor.";

        let result = parse(email, None, &[]);

        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.job_number, "");
        assert_eq!(result.errors, vec![MISSING_JOB_NUMBER.to_string()]);

        let first = &result.issues[0];
        assert_eq!(first.id.to_string(), "ERE-001");
        assert_eq!(first.category, Category::ErectionDrawings);
        assert_eq!(first.status, IssueStatus::Fixed);
        assert_eq!(first.description, "Beam B3 depth wrong");
        assert_eq!(first.resolution_notes, "Corrected to 21in per calc, fixed.");
        assert_eq!(first.assignee, "Engineering Team");
        assert!(first.review_history.is_empty());

        let second = &result.issues[1];
        assert_eq!(second.id.to_string(), "SHP-001");
        assert_eq!(second.category, Category::Shipper);
        assert_eq!(second.status, IssueStatus::UnderReview);
        assert_eq!(second.description, "BOM count mismatch, will review with vendor.");
        assert_eq!(second.resolution_notes, "");
        assert_eq!(second.assignee, "Production Team");
    }

    #[test]
    fn test_absent_content() {
        let mut counters = CategoryCounters::new();
        let result = parse_email_content(None, Some("113980"), &mut counters, today());

        assert!(result.issues.is_empty());
        assert_eq!(result.errors, vec![INVALID_CONTENT.to_string()]);
        assert_eq!(counters, CategoryCounters::new());
    }

    #[test]
    fn test_job_hint_suppresses_warning() {
        let result = parse("Shop Drawings\n1. Unclear callout.", Some("113980"), &[]);

        assert_eq!(result.job_number, "113980");
        assert!(result.errors.is_empty());
        assert_eq!(result.issues.len(), 1);

        let issue = &result.issues[0];
        assert_eq!(issue.id.to_string(), "SHD-001");
        assert_eq!(issue.job_number, "113980");
        assert_eq!(issue.status, IssueStatus::New);
        assert_eq!(issue.assignee, "Detailing Team");
        assert_eq!(issue.date_reported, today());
    }

    #[test]
    fn test_hint_takes_precedence_over_detection() {
        let result = parse("Job #555555\nShipper\n1. Short", Some("113980"), &[]);
        assert_eq!(result.job_number, "113980");
    }

    #[test]
    fn test_empty_hint_falls_back_to_detection() {
        let result = parse("Project #7781\nShipper\n1. Short", Some(""), &[]);
        assert_eq!(result.job_number, "7781");
        assert_eq!(result.issues[0].job_number, "7781");
    }

    #[test]
    fn test_seeded_counters_continue_numbering() {
        let email = "Erection\n1. A\nShipper\n1. B\nShop Drawings\n1. C";
        let result = parse(email, Some("1"), &["ERE-005", "SHP-002"]);

        let ids: Vec<String> = result.issues.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["ERE-006", "SHP-003", "SHD-001"]);
    }

    #[test]
    fn test_numbered_line_before_any_header_is_ignored() {
        let email = "Hi team,\n1. This is not categorised yet\nShop Drawings\n1. Hole size";
        let result = parse(email, Some("1"), &[]);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].description, "Hole size");
    }

    #[test]
    fn test_no_items_warns() {
        let result = parse("Hi team,\nPlease see attached.\nThanks", None, &[]);

        assert!(result.issues.is_empty());
        assert_eq!(
            result.errors,
            vec![MISSING_JOB_NUMBER.to_string(), NO_ISSUES_PARSED.to_string()]
        );
    }

    #[test]
    fn test_whitespace_only_content_is_scanned() {
        let result = parse("   \n\t\n", Some("1"), &[]);
        assert_eq!(result.errors, vec![NO_ISSUES_PARSED.to_string()]);
    }

    #[test]
    fn test_multi_line_description_with_separator() {
        let email = "Job Number: 114520\n\
                     Shop Drawings\n\
                     1. Missing bolt specifications at grid line 5\n\
                     need grade and size callouts\n\
                     --\n\
                     2) Weld symbol wrong\n\
                     Erection Drawings\n\
                     1. Anchor bolt layout";

        let result = parse(email, None, &[]);

        assert_eq!(result.job_number, "114520");
        assert_eq!(result.issues.len(), 3);
        assert_eq!(
            result.issues[0].description,
            "Missing bolt specifications at grid line 5 need grade and size callouts"
        );
        assert_eq!(result.issues[1].id.to_string(), "SHD-002");
        assert_eq!(result.issues[1].description, "Weld symbol wrong");
        assert_eq!(result.issues[2].id.to_string(), "ERE-001");
    }

    #[test]
    fn test_status_uses_text_before_note_split() {
        let result = parse("Shipper\n1. Plate count off - resolved with vendor", Some("1"), &[]);

        let issue = &result.issues[0];
        assert_eq!(issue.status, IssueStatus::Fixed);
        assert_eq!(issue.description, "Plate count off");
        assert_eq!(issue.resolution_notes, "resolved with vendor");
    }

    #[test]
    fn test_fixed_outranks_needs_rework() {
        let result = parse("Shop\n1. Fixed last week but needs rework again", Some("1"), &[]);
        assert_eq!(result.issues[0].status, IssueStatus::Fixed);
    }

    #[test]
    fn test_description_without_dash_is_unchanged() {
        let result = parse("Shop\n1.   Column splice detail unclear   ", Some("1"), &[]);
        assert_eq!(result.issues[0].description, "Column splice detail unclear");
        assert_eq!(result.issues[0].resolution_notes, "");
    }

    #[test]
    fn test_header_line_can_also_be_an_item() {
        let result = parse("1. Ship loose angles separately", Some("1"), &[]);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].category, Category::Shipper);
    }

    #[test]
    fn test_no_duplicate_ids_per_category() {
        let email = "Shipper\n1. a\n2. b\n3. c\nShop Drawings\n1. d\nShipper\n4. e";
        let result = parse(email, Some("1"), &["SHP-009"]);

        let ids: HashSet<_> = result.issues.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), result.issues.len());
        assert_eq!(result.issues.last().unwrap().id.to_string(), "SHP-013");
    }

    #[test]
    fn test_largest_seed_does_not_repeat() {
        let result = parse("Erection\n1. a\n2. b", Some("1"), &["ERE-4294967295"]);

        let ids: Vec<String> = result.issues.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["ERE-001", "ERE-002"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_exhausted_category_skips_items() {
        let result = parse("Erection\n1. a\n2. b\nShipper\n1. c", Some("1"), &["ERE-4294967294"]);

        let ids: Vec<String> = result.issues.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["ERE-4294967295", "SHP-001"]);
        assert_eq!(
            result.errors,
            vec!["No display IDs left for ERE; item skipped: b".to_string()]
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        let result = parse("Job #\u{661}\u{662}\u{663}\nShipper\n\u{663}. Arabic numbered", None, &[]);

        assert_eq!(result.job_number, "");
        assert!(result.issues.is_empty());
        assert_eq!(
            result.errors,
            vec![MISSING_JOB_NUMBER.to_string(), NO_ISSUES_PARSED.to_string()]
        );
    }

    #[test]
    fn test_counters_carry_across_parses() {
        let extractor =
            IssueExtractor::with_clock(ExtractorConfig::default(), FixedClock(today()));
        let mut counters = CategoryCounters::new();

        extractor.parse(Some("Shipper\n1. a"), Some("1"), &mut counters);
        let second = extractor.parse(Some("Shipper\n1. b"), Some("1"), &mut counters);

        assert_eq!(second.issues[0].id.to_string(), "SHP-002");
    }

    #[test]
    fn test_parse_is_deterministic_with_fixed_inputs() {
        let email = "Job #113980\nErection\n1. Beam - done\n2. Column will fix";
        let first = parse(email, None, &["ERE-010"]);
        let second = parse(email, None, &["ERE-010"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_result_json_shape() {
        let result = parse("Shop Drawings\n1. Unclear callout.", Some("113980"), &[]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["jobNumber"], "113980");
        assert_eq!(json["issues"][0]["id"], "SHD-001");
        assert_eq!(json["issues"][0]["category"], "Shop Drawings");
        assert!(json["errors"].as_array().unwrap().is_empty());
    }
}
