//! Category module - the three drafting-issue classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Drafting issue category
///
/// Every issue belongs to exactly one category, which fixes both the prefix of
/// its display ID and the team it is assigned to:
/// - Erection Drawings: `ERE`, Engineering Team
/// - Shipper: `SHP`, Production Team
/// - Shop Drawings: `SHD`, Detailing Team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Erection drawings
    #[serde(rename = "Erection Drawings")]
    ErectionDrawings,

    /// Shipper (bill of materials / shipping lists)
    #[serde(rename = "Shipper")]
    Shipper,

    /// Shop drawings
    #[serde(rename = "Shop Drawings")]
    ShopDrawings,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 3] = [
        Category::ErectionDrawings,
        Category::Shipper,
        Category::ShopDrawings,
    ];

    /// Human-readable category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ErectionDrawings => "Erection Drawings",
            Category::Shipper => "Shipper",
            Category::ShopDrawings => "Shop Drawings",
        }
    }

    /// Display ID prefix for this category
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::ErectionDrawings => "ERE",
            Category::Shipper => "SHP",
            Category::ShopDrawings => "SHD",
        }
    }

    /// Team that new issues in this category are assigned to
    pub fn assignee(&self) -> &'static str {
        match self {
            Category::ErectionDrawings => "Engineering Team",
            Category::Shipper => "Production Team",
            Category::ShopDrawings => "Detailing Team",
        }
    }

    /// Stable position of the category, usable as an array index
    pub fn index(&self) -> usize {
        match self {
            Category::ErectionDrawings => 0,
            Category::Shipper => 1,
            Category::ShopDrawings => 2,
        }
    }

    /// Look up a category by its display ID prefix
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }

    /// Parse a category from its name or prefix (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.into_iter().find(|c| {
            c.as_str().eq_ignore_ascii_case(needle) || c.prefix().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
