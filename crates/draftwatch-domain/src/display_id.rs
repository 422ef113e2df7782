//! Display identifiers such as `ERE-001`

use crate::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable issue identifier: `<PREFIX>-<NNN>`
///
/// The sequence number is zero-padded to at least three digits, so `ERE-001`
/// and `SHP-1024` are both valid renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DisplayId {
    category: Category,
    number: u32,
}

impl DisplayId {
    /// Create a display ID for a category and sequence number
    pub fn new(category: Category, number: u32) -> Self {
        Self { category, number }
    }

    /// Category encoded in the prefix
    pub fn category(&self) -> Category {
        self.category
    }

    /// Sequence number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Parse `<PREFIX>-<digits>` where PREFIX is ERE, SHP or SHD
    ///
    /// Anything else (unknown prefix, missing digits, trailing text, a number
    /// that does not fit in a `u32`) yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftwatch_domain::{Category, DisplayId};
    ///
    /// let id = DisplayId::parse("SHP-012").unwrap();
    /// assert_eq!(id.category(), Category::Shipper);
    /// assert_eq!(id.number(), 12);
    /// assert!(DisplayId::parse("DIT-2024-005").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let (prefix, digits) = s.trim().split_once('-')?;
        let category = Category::from_prefix(prefix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number = digits.parse().ok()?;
        Some(Self { category, number })
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.category.prefix(), self.number)
    }
}

impl std::str::FromStr for DisplayId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid display ID: {}", s))
    }
}

impl From<DisplayId> for String {
    fn from(id: DisplayId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for DisplayId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
