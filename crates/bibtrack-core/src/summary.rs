//! Output summaries
//!
//! The per-run roll-up of a comparison: how many entries were rendered,
//! how many differed, and the counts per difference category and per
//! cause combination.

use serde::Serialize;
use std::cmp::Reverse;

use crate::category::Category;

/// Cause label for a pair reconciled only by every transform at once.
pub const CAUSE_ALL: &str = "All";
/// Cause label for a pair no transform subset reconciles.
pub const CAUSE_UNKNOWN: &str = "Unknown";

/// Summary of one comparison run.
///
/// Both count lists are canonically ordered: descending by count with
/// `Unknown` last. Ties break by category display order (differences) or
/// label (causes), so the ordering is total and regeneration is
/// byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSummary {
    /// Number of bibliography entries rendered.
    pub n_entries: u64,
    /// Number of entries whose rendering differed.
    pub n_diff: u64,
    /// Count per difference category.
    pub diff_counts: Vec<(Category, u64)>,
    /// Count per cause: a `+`-joined category combination, `All`, or
    /// `Unknown`.
    pub cause_counts: Vec<(String, u64)>,
}

impl OutputSummary {
    /// Build a summary, applying the canonical ordering to both lists.
    pub fn new(
        n_entries: u64,
        n_diff: u64,
        mut diff_counts: Vec<(Category, u64)>,
        mut cause_counts: Vec<(String, u64)>,
    ) -> Self {
        diff_counts.sort_by_key(|(category, count)| {
            (*category == Category::Unknown, Reverse(*count), *category)
        });
        cause_counts.sort_by(|(a_label, a_count), (b_label, b_count)| {
            (a_label == CAUSE_UNKNOWN, Reverse(a_count))
                .cmp(&(b_label == CAUSE_UNKNOWN, Reverse(b_count)))
                .then_with(|| a_label.cmp(b_label))
        });
        Self {
            n_entries,
            n_diff,
            diff_counts,
            cause_counts,
        }
    }
}
