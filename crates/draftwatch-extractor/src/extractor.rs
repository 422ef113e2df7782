//! Core Extractor implementation

use crate::clock::{Clock, SystemClock};
use crate::config::ExtractorConfig;
use crate::counters::{CategoryCounters, SharedCounters};
use crate::parser::parse_with_config;
use crate::types::{ParseResult, INVALID_CONTENT};
use tracing::info;

/// The Extractor converts pasted email text into issue drafts
///
/// It holds configuration and a date source; the category counters stay with
/// the caller so that seeding and sharing them is explicit.
#[derive(Debug, Clone)]
pub struct IssueExtractor<C = SystemClock> {
    config: ExtractorConfig,
    clock: C,
}

impl IssueExtractor<SystemClock> {
    /// Create a new Extractor reading dates from the wall clock
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for IssueExtractor<SystemClock> {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl<C: Clock> IssueExtractor<C> {
    /// Create a new Extractor with a specific clock
    pub fn with_clock(config: ExtractorConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse email text, drawing display IDs from `counters`
    pub fn parse(
        &self,
        content: Option<&str>,
        job_number_hint: Option<&str>,
        counters: &mut CategoryCounters,
    ) -> ParseResult {
        let result = parse_with_config(
            content,
            job_number_hint,
            counters,
            self.clock.today(),
            &self.config,
        );

        info!(
            "Parsed {} issues for job '{}' with {} warnings",
            result.issues.len(),
            result.job_number,
            result.errors.len()
        );

        result
    }

    /// Parse raw bytes; anything that is not UTF-8 counts as invalid content
    pub fn parse_bytes(
        &self,
        content: &[u8],
        job_number_hint: Option<&str>,
        counters: &mut CategoryCounters,
    ) -> ParseResult {
        match std::str::from_utf8(content) {
            Ok(text) => self.parse(Some(text), job_number_hint, counters),
            Err(e) => {
                info!("Rejected non-UTF-8 email content: {}", e);
                ParseResult::rejected(INVALID_CONTENT)
            }
        }
    }

    /// Parse with counters shared between threads
    ///
    /// The counter lock is held for the whole parse.
    pub fn parse_shared(
        &self,
        content: Option<&str>,
        job_number_hint: Option<&str>,
        counters: &SharedCounters,
    ) -> ParseResult {
        counters.with(|counters| self.parse(content, job_number_hint, counters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn create_test_extractor() -> IssueExtractor<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        IssueExtractor::with_clock(ExtractorConfig::default(), FixedClock(today))
    }

    #[test]
    fn test_parse_uses_clock_date() {
        let extractor = create_test_extractor();
        let mut counters = CategoryCounters::new();

        let result = extractor.parse(Some("Shipper\n1. Short count"), Some("114520"), &mut counters);
        assert_eq!(result.issues[0].date_reported, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let extractor = create_test_extractor();
        let mut counters = CategoryCounters::new();

        let result = extractor.parse_bytes(&[0x53, 0x68, 0xff, 0xfe], None, &mut counters);
        assert!(result.issues.is_empty());
        assert_eq!(result.errors, vec![INVALID_CONTENT.to_string()]);
    }

    #[test]
    fn test_parse_bytes_accepts_utf8() {
        let extractor = create_test_extractor();
        let mut counters = CategoryCounters::new();

        let result = extractor.parse_bytes("Shop\n1) Hole size – ok".as_bytes(), Some("1"), &mut counters);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].resolution_notes, "ok");
    }

    #[test]
    fn test_parse_shared_advances_counters() {
        let extractor = create_test_extractor();
        let shared = SharedCounters::default();

        let first = extractor.parse_shared(Some("Erection\n1. A\n2. B"), Some("1"), &shared);
        let second = extractor.parse_shared(Some("Erection\n1. C"), Some("1"), &shared);

        let ids: Vec<String> = first
            .issues
            .iter()
            .chain(second.issues.iter())
            .map(|issue| issue.id.to_string())
            .collect();
        assert_eq!(ids, vec!["ERE-001", "ERE-002", "ERE-003"]);
    }
}
