//! Draftwatch Domain Layer
//!
//! This crate contains the domain model for Draftwatch, a tracker for drafting
//! issues (defects found in erection drawings, shippers and shop drawings).
//! It performs no I/O and defines the value types and trait interfaces that
//! the extractor, store and CLI crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Category**: one of the three fixed drafting-issue classifications. It
//!   decides the display ID prefix and the default assignee.
//! - **Display ID**: the human-readable `ERE-001` style identifier, distinct
//!   from the storage key.
//! - **Issue draft**: a record extracted from email text, not yet persisted.
//! - **Issue record**: a confirmed draft plus storage metadata, its review
//!   history and any notes added later. Records move through the workflow by
//!   review, by direct status moves and by field edits; category and display
//!   ID never change.
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod display_id;
pub mod edit;
pub mod issue;
pub mod note;
pub mod review;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use display_id::DisplayId;
pub use edit::IssueEdit;
pub use issue::{IssueKey, IssueRecord, ParsedIssueDraft, UploadMetadata};
pub use note::IssueNote;
pub use review::ReviewEntry;
pub use status::IssueStatus;
