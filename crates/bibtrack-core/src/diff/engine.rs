//! Comparison engine.

use std::collections::BTreeMap;

use crate::category::Category;
use crate::diff::model::Difference;
use crate::summary::OutputSummary;

/// Collect and classify the differing line pairs of two outputs.
///
/// Lines are paired positionally (entry counts are expected to match) and
/// the result is sorted by [`Difference::cmp_order`].
pub fn compare_outputs(expected: &str, actual: &str) -> Vec<Difference> {
    let mut diffs: Vec<Difference> = expected
        .lines()
        .zip(actual.lines())
        .filter(|(e, a)| e != a)
        .map(|(e, a)| Difference::new(e, a))
        .collect();
    diffs.sort_by(|a, b| a.cmp_order(b));

    tracing::debug!(n_diff = diffs.len(), "classified differing lines");
    diffs
}

/// Fold classified differences into a canonical summary.
///
/// A difference counts once per category in its minimal subsequence (or
/// once as `Unknown`), and once under its cause label.
pub fn summarize(diffs: &[Difference], n_entries: u64) -> OutputSummary {
    let mut diff_counts: BTreeMap<Category, u64> = BTreeMap::new();
    let mut cause_counts: BTreeMap<String, u64> = BTreeMap::new();

    for diff in diffs {
        match &diff.eq_ignore_min {
            Some(min) => {
                for category in min {
                    *diff_counts.entry(*category).or_default() += 1;
                }
            }
            None => *diff_counts.entry(Category::Unknown).or_default() += 1,
        }
        *cause_counts.entry(diff.cause()).or_default() += 1;
    }

    OutputSummary::new(
        n_entries,
        diffs.len() as u64,
        diff_counts.into_iter().collect(),
        cause_counts.into_iter().collect(),
    )
}
