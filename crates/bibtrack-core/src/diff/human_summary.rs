//! Human-readable rendering of comparison results.

use crate::category::Category;
use crate::diff::model::Difference;
use crate::summary::{OutputSummary, CAUSE_UNKNOWN};

fn percent(count: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", 100.0 * count as f64 / total as f64)
}

/// Render the counts-and-percentages summary of a comparison run.
///
/// Percentages are shares of the differing entries, not of all entries;
/// a single entry may count under several categories at once.
pub fn render_summary(summary: &OutputSummary) -> String {
    let mut out = String::new();
    let total = summary.n_diff;

    out.push_str("Summary of differences:\n");
    for (category, count) in &summary.diff_counts {
        let label = if *category == Category::Unknown {
            "Unknown"
        } else {
            category.as_str()
        };
        out.push_str(&format!(
            "  {:>10}: {:>3} ≈ {:>3}\n",
            label,
            count,
            percent(*count, total)
        ));
    }

    out.push_str("\nSummary of combinations of differences:\n");
    for (cause, count) in &summary.cause_counts {
        let spelled = if cause == CAUSE_UNKNOWN {
            CAUSE_UNKNOWN.to_string()
        } else {
            cause.replace('+', " + ")
        };
        out.push_str(&format!(
            "  {:>3} ≈ {:>3} caused by {}\n",
            count,
            percent(*count, total),
            spelled
        ));
    }

    out.push_str(&format!("\nTotal differences: {}\n", summary.n_diff));
    out
}

/// Render numbered per-line details of the differences.
pub fn render_details(diffs: &[Difference]) -> String {
    let mut out = String::new();
    for (n, diff) in diffs.iter().enumerate() {
        out.push_str(&format!(
            "\n{:03} — cause: {}\nExpected: {}\nActual:   {}\n",
            n + 1,
            diff.cause(),
            diff.expected,
            diff.actual
        ));
    }
    out
}
