//! Record enrichment
//!
//! Joins each raw record with the static tables: the resolved engine
//! label and date, the typst coverage window, and browsable links. Runs
//! once per load; the result is immutable from here on.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use bibtrack_core::{
    resolve_coverage, Category, CommitDates, Coverage, OutputSummary, ReleaseSet,
    SourceRef, VersionIndex,
};

use crate::errors::{LoadError, Result};
use crate::fixtures;
use crate::format::{HistoryFile, OutputInput};
use crate::links;

/// Browsable URLs derived from a record's version fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLinks {
    /// Release page or pinned tree of the engine build.
    pub source: String,
    /// Blob page of the entries file, when the revision is present.
    pub entries: Option<String>,
}

/// The raw expected and actual outputs behind a record.
///
/// Only attached to the newest record, and only when the comparison cache
/// still holds both texts; older records never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub expected: String,
    pub actual: String,
}

/// One fully enriched history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub entries_rev: String,
    pub csl_updated_at: String,
    pub hayagriva_source: String,

    /// Human name for the engine version.
    pub label: String,
    /// Publication date of the engine version, normalized to UTC.
    pub date: DateTime<Utc>,
    /// The typst release that first bundled this engine version, or `None`
    /// while no released typst includes it yet.
    pub coverage: Option<Coverage>,
    pub links: RecordLinks,
    pub output: OutputSummary,
    pub result: Option<ComparisonResult>,
}

/// Enrich parsed records against the built-in fixture tables.
pub fn enrich(history: HistoryFile) -> Result<Vec<HistoryRecord>> {
    let releases = fixtures::hayagriva_releases()?;
    let commits = fixtures::hayagriva_commits()?;
    let typst = fixtures::typst_releases()?;
    enrich_with(history, &releases, &commits, &typst)
}

/// Enrich parsed records against explicit tables.
pub fn enrich_with(
    history: HistoryFile,
    releases: &ReleaseSet,
    commits: &CommitDates,
    typst: &ReleaseSet,
) -> Result<Vec<HistoryRecord>> {
    let index = VersionIndex::new(releases, commits);

    history
        .records
        .into_iter()
        .map(|record| {
            let source_ref = SourceRef::parse(&record.hayagriva_source)?;
            let resolved = index.resolve(&source_ref)?;
            let coverage = resolve_coverage(resolved.date, releases, typst)?;
            let output = convert_output(record.output, &record.hayagriva_source)?;

            tracing::debug!(
                label = %resolved.label.replace('\n', " "),
                covered = coverage.is_some(),
                "enriched history record"
            );

            Ok(HistoryRecord {
                links: RecordLinks {
                    source: links::source_url(&record.hayagriva_source, &source_ref),
                    entries: links::entries_url(&record.entries_rev),
                },
                entries_rev: record.entries_rev,
                csl_updated_at: record.csl_updated_at,
                hayagriva_source: record.hayagriva_source,
                label: resolved.label,
                date: resolved.date,
                coverage,
                output,
                result: None,
            })
        })
        .collect()
}

/// Convert raw string-keyed counts into the typed, canonically ordered
/// summary. The parser has already validated the keys; this keeps the
/// conversion safe when called on unvalidated input.
fn convert_output(output: OutputInput, source_url: &str) -> Result<OutputSummary> {
    let mut diff_counts = Vec::with_capacity(output.diff_counts.len());
    let mut undeclared = Vec::new();
    for (key, count) in output.diff_counts {
        match Category::from_str(&key) {
            Ok(category) => diff_counts.push((category, count)),
            Err(_) => undeclared.push(key),
        }
    }
    if !undeclared.is_empty() {
        return Err(LoadError::UndeclaredCategories {
            keys: undeclared,
            source_url: source_url.to_string(),
        });
    }

    Ok(OutputSummary::new(
        output.n_entries,
        output.n_diff,
        diff_counts,
        output.cause_counts.into_iter().collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_history_str;

    const HISTORY: &str = r#"
version = 1

[[record]]
entries_rev = "zotero-chinese/styles#ce0786d7"
csl_updated_at = "2024-06-20T18:30:00+08:00"
hayagriva_source = "git+https://github.com/typst/hayagriva?tag=v0.8.0"

[record.output]
n_entries = 112
n_diff = 7

[record.output.diff_counts]
lang = 5
case = 2

[record.output.cause_counts]
lang = 5
case = 2
"#;

    #[test]
    fn test_enrich_resolves_label_date_and_coverage() {
        let history = parse_history_str(HISTORY).unwrap();
        let records = enrich(history).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.label, "v0.8.0");
        assert_eq!(record.date.to_rfc3339(), "2024-10-15T13:48:43+00:00");

        let coverage = record.coverage.as_ref().unwrap();
        assert_eq!(coverage.first_covered, "v0.12.0-rc2");
        assert_eq!(
            coverage.covered_range,
            ("v0.8.0".to_string(), "v0.8.0".to_string())
        );
    }

    #[test]
    fn test_enrich_orders_counts_canonically() {
        let history = parse_history_str(HISTORY).unwrap();
        let records = enrich(history).unwrap();
        assert_eq!(
            records[0].output.diff_counts,
            vec![(Category::Lang, 5), (Category::Case, 2)]
        );
    }

    #[test]
    fn test_enrich_fails_on_unknown_tag() {
        let history = parse_history_str(&HISTORY.replace("tag=v0.8.0", "tag=v9.9.9")).unwrap();
        let err = enrich(history).unwrap_err();
        assert!(matches!(err, LoadError::Resolve(_)));
    }

    #[test]
    fn test_enrich_resolves_branch_builds() {
        let history = parse_history_str(
            &HISTORY.replace("?tag=v0.8.0", "?branch=main#a137441deadbeef"),
        )
        .unwrap();
        let records = enrich(history).unwrap();
        assert_eq!(records[0].label, "main\n(a137441)");
        // The commit postdates the newest typst release, so no inclusion
        // window contains it yet.
        assert!(records[0].coverage.is_none());
    }
}
