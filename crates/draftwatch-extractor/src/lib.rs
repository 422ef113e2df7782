//! Draftwatch Extractor
//!
//! Converts pasted review emails into structured drafting-issue drafts.
//!
//! # Overview
//!
//! Reviewers send comments as loosely formatted email: a category header
//! ("Erection Drawings", "Shipper", "Shop Drawings") followed by numbered
//! items, sometimes with a resolution note after a dash. The extractor scans
//! that text line by line and produces one draft per numbered item.
//!
//! # Architecture
//!
//! ```text
//! Email text → lines → category state + numbered items → drafts
//!                                                ↑
//!                            CategoryCounters (seeded from the store)
//! ```
//!
//! # Key Features
//!
//! - **Job number detection**: `Job #`, `Project #`, `Job number:` or a bare
//!   6-digit number, unless the caller supplies one
//! - **Multi-line items**: continuation lines are folded into the description
//! - **Status cues**: "fixed", "will review", "cannot change" and friends
//! - **Resolution notes**: text after the trailing dash
//! - **Collision-free IDs**: per-category counters seeded from known IDs
//!
//! # Warnings
//!
//! Parsing never fails. Problems are reported as strings in
//! [`ParseResult::errors`], and drafts may still be present alongside them:
//!
//! - [`INVALID_CONTENT`]: input absent, empty or not UTF-8; no drafts
//! - `Email content too long: N chars (max: M)`: input longer than
//!   [`ExtractorConfig::max_text_length`]; no drafts, even for a well-formed email
//! - [`MISSING_JOB_NUMBER`]: no hint and nothing detected (can be switched off)
//! - `No display IDs left for PREFIX; item skipped: ...`: the category's
//!   counter is exhausted
//! - [`NO_ISSUES_PARSED`]: the scan produced no drafts
//!
//! # Example Usage
//!
//! ```
//! use draftwatch_extractor::{CategoryCounters, ExtractorConfig, IssueExtractor};
//!
//! let known_ids = ["ERE-005", "SHP-002"];
//! let mut counters = CategoryCounters::seeded(known_ids);
//! let extractor = IssueExtractor::new(ExtractorConfig::default());
//!
//! let email = "Job #113980\nErection Drawings\n1. Beam B3 depth wrong - Corrected, fixed.";
//! let result = extractor.parse(Some(email), None, &mut counters);
//!
//! assert_eq!(result.job_number, "113980");
//! assert_eq!(result.issues[0].id.to_string(), "ERE-006");
//! assert_eq!(result.issues[0].resolution_notes, "Corrected, fixed.");
//! ```

#![warn(missing_docs)]

mod clock;
mod config;
mod counters;
mod error;
mod extractor;
mod parser;
pub mod patterns;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ExtractorConfig;
pub use counters::{CategoryCounters, SharedCounters};
pub use error::ExtractorError;
pub use extractor::IssueExtractor;
pub use parser::parse_email_content;
pub use types::{ParseResult, INVALID_CONTENT, MISSING_JOB_NUMBER, NO_ISSUES_PARSED};
