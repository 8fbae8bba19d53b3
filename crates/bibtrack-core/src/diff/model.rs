//! Difference model.

use std::cmp::Ordering;

use crate::category::Category;
use crate::diff::minimize::minimize_seq;
use crate::diff::transform::eq_ignore;
use crate::summary::{CAUSE_ALL, CAUSE_UNKNOWN};

/// One differing line pair, classified by the minimal transform
/// subsequence that reconciles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// The reference rendering.
    pub expected: String,
    /// The engine's rendering.
    pub actual: String,
    /// The strongest equality between the outputs: the minimal subsequence
    /// of [`Category::IGNORE_ORDER`] that makes them equal (weakly), or
    /// `None` if even the full sequence does not.
    pub eq_ignore_min: Option<Vec<Category>>,
}

impl Difference {
    /// Classify a differing pair. The two lines must not be equal.
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        debug_assert_ne!(expected, actual, "no difference between outputs");

        let eq_ignore_min = minimize_seq(
            |actions| eq_ignore(&expected, &actual, actions),
            &Category::IGNORE_ORDER,
        );
        Self {
            expected,
            actual,
            eq_ignore_min,
        }
    }

    /// The cause label: `All` when every transform was needed, `Unknown`
    /// when none suffice, otherwise the `+`-joined minimal subsequence.
    pub fn cause(&self) -> String {
        match &self.eq_ignore_min {
            Some(min) if min.as_slice() == Category::IGNORE_ORDER.as_slice() => {
                CAUSE_ALL.to_string()
            }
            None => CAUSE_UNKNOWN.to_string(),
            Some(min) => min
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join("+"),
        }
    }

    /// Leading `[n]` citation number of the expected line, or -1.
    fn citation_number(&self) -> i64 {
        let Some(rest) = self.expected.strip_prefix('[') else {
            return -1;
        };
        let Some(end) = rest.find(']') else {
            return -1;
        };
        rest[..end].parse().unwrap_or(-1)
    }

    /// Classified differences sort before unknown ones, then by which
    /// transforms they need (canonical order), then by citation number,
    /// then by text.
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        self.class_key()
            .cmp(&other.class_key())
            .then_with(|| self.citation_number().cmp(&other.citation_number()))
            .then_with(|| self.expected.cmp(&other.expected))
            .then_with(|| self.actual.cmp(&other.actual))
    }

    fn class_key(&self) -> (u8, Vec<bool>) {
        match &self.eq_ignore_min {
            Some(min) => (
                0,
                Category::IGNORE_ORDER
                    .iter()
                    .map(|c| !min.contains(c))
                    .collect(),
            ),
            None => (1, Vec::new()),
        }
    }
}
