//! Difference categories
//!
//! The closed, ordered classification of discrepancies between the
//! reference bibliography output and the engine's output for the same
//! entry. Loading fails fast on any key outside this set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A category of difference between two renderings of one entry.
///
/// All categories except [`Category::Unknown`] double as *ignore
/// transforms*: text normalizations that erase that class of difference.
/// `Unknown` marks a difference no transform subset explains.
///
/// The declaration order is the display order; derived `Ord` relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// Chinese vs English rendering of bibliographic markers
    #[serde(rename = "lang")]
    Lang,
    /// Letter-case differences
    #[serde(rename = "case")]
    Case,
    /// A literal `卷 ` volume marker after `: `
    #[serde(rename = "卷")]
    Volume,
    /// A stray `: <number>` before punctuation
    #[serde(rename = "num")]
    Num,
    /// Backslash-escaped hyphens
    #[serde(rename = "escape")]
    Escape,
    /// Whitespace at a Han/non-Han script boundary
    #[serde(rename = "han_space")]
    HanSpace,
    /// Whitespace between ASCII alphanumerics
    #[serde(rename = "code_space")]
    CodeSpace,
    /// Trailing `.` after `]`, or a `:`, plus following whitespace
    #[serde(rename = "punct")]
    Punct,
    /// Not explained by any transform subset
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::Lang,
        Category::Case,
        Category::Volume,
        Category::Num,
        Category::Escape,
        Category::HanSpace,
        Category::CodeSpace,
        Category::Punct,
        Category::Unknown,
    ];

    /// The canonical transform application order.
    ///
    /// Any subsequence of this order, applied left to right, satisfies the
    /// sequencing constraints of [`crate::diff::transform::apply_ignores`].
    pub const IGNORE_ORDER: [Category; 8] = [
        Category::Lang,
        Category::Case,
        Category::Volume,
        Category::Num,
        Category::Escape,
        Category::HanSpace,
        Category::CodeSpace,
        Category::Punct,
    ];

    /// The stable string form used in input files and generated artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lang => "lang",
            Category::Case => "case",
            Category::Volume => "卷",
            Category::Num => "num",
            Category::Escape => "escape",
            Category::HanSpace => "han_space",
            Category::CodeSpace => "code_space",
            Category::Punct => "punct",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `diff_counts` key that is not part of the closed category set
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown difference category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
