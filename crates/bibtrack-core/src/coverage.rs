//! Coverage resolution
//!
//! Determines which downstream release first bundled a given upstream
//! build, and the inclusive range of upstream releases that bundling
//! picked up. "Upstream" is the library whose history is tracked;
//! "downstream" is the application shipping it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{ResolveError, Result};
use crate::release::ReleaseSet;

/// The downstream release that first shipped an upstream build, plus the
/// inclusive `[oldest, newest]` range of upstream tags its inclusion
/// window covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub first_covered: String,
    pub covered_range: (String, String),
}

/// Resolve coverage for an upstream build published at `date`.
///
/// Both release sets are newest first. The scan finds the first adjacent
/// downstream pair `(current, older)` with
/// `current.published_at >= date > older.published_at`; the inclusion
/// window is the half-open interval `(older, current]`. The oldest
/// downstream release has no older neighbor to bound a window, so it can
/// never be the first to cover anything; exhausting the scan yields
/// `Ok(None)` ("not yet covered").
///
/// # Errors
///
/// `EmptyCoveredRange` when the matched window contains no upstream
/// release. The build that matched must itself fall in the window, so an
/// empty subset means the two tables disagree.
pub fn resolve_coverage(
    date: DateTime<Utc>,
    upstream: &ReleaseSet,
    downstream: &ReleaseSet,
) -> Result<Option<Coverage>> {
    let Some((current, older)) = downstream
        .as_slice()
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .find(|(current, older)| {
            current.published_at >= date && date > older.published_at
        })
    else {
        return Ok(None);
    };

    let first_covered_at = current.published_at;
    let last_uncovered_at = older.published_at;

    let covered: Vec<_> = upstream
        .iter()
        .filter(|r| first_covered_at >= r.published_at && r.published_at > last_uncovered_at)
        .collect();

    // Still newest first, so oldest = last, newest = first.
    let (Some(newest), Some(oldest)) = (covered.first(), covered.last()) else {
        return Err(ResolveError::EmptyCoveredRange {
            first_covered: current.tag.clone(),
        });
    };

    Ok(Some(Coverage {
        first_covered: current.tag.clone(),
        covered_range: (oldest.tag.clone(), newest.tag.clone()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::parse_timestamp;

    fn upstream() -> ReleaseSet {
        ReleaseSet::from_table(&[
            ("v0.8.0", "2024-10-15T13:48:43Z"),
            ("v0.7.0", "2024-10-03T14:54:02Z"),
            ("v0.6.0", "2024-10-02T13:29:23Z"),
            ("v0.5.3", "2024-05-16T10:23:58Z"),
        ])
        .unwrap()
    }

    fn downstream() -> ReleaseSet {
        ReleaseSet::from_table(&[
            ("v0.12.0", "2024-10-18T21:41:48Z"),
            ("v0.12.0-rc2", "2024-10-15T14:28:05Z"),
            ("v0.12.0-rc1", "2024-10-03T21:52:10Z"),
            ("v0.11.1", "2024-05-17T15:33:15Z"),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_covering_release_selected() {
        let date = parse_timestamp("2024-10-15T13:48:43Z").unwrap();
        let coverage = resolve_coverage(date, &upstream(), &downstream())
            .unwrap()
            .unwrap();
        assert_eq!(coverage.first_covered, "v0.12.0-rc2");
        assert_eq!(
            coverage.covered_range,
            ("v0.8.0".to_string(), "v0.8.0".to_string())
        );
    }

    #[test]
    fn test_window_is_half_open() {
        // Exactly on the older bound falls outside the window and into the
        // next-newer scan position's older window.
        let date = parse_timestamp("2024-10-03T21:52:10Z").unwrap();
        let coverage = resolve_coverage(date, &upstream(), &downstream())
            .unwrap()
            .unwrap();
        assert_eq!(coverage.first_covered, "v0.12.0-rc1");
    }

    #[test]
    fn test_window_covers_multiple_upstream_releases() {
        let date = parse_timestamp("2024-10-03T14:54:02Z").unwrap();
        let coverage = resolve_coverage(date, &upstream(), &downstream())
            .unwrap()
            .unwrap();
        assert_eq!(coverage.first_covered, "v0.12.0-rc1");
        assert_eq!(
            coverage.covered_range,
            ("v0.5.3".to_string(), "v0.7.0".to_string())
        );
    }

    #[test]
    fn test_date_older_than_all_windows_is_uncovered() {
        let date = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(
            resolve_coverage(date, &upstream(), &downstream()).unwrap(),
            None
        );
    }

    #[test]
    fn test_date_newer_than_all_windows_is_uncovered() {
        let date = parse_timestamp("2025-01-01T00:00:00Z").unwrap();
        assert_eq!(
            resolve_coverage(date, &upstream(), &downstream()).unwrap(),
            None
        );
    }

    #[test]
    fn test_empty_covered_range_is_fatal() {
        // A window that matches the probe date but contains no upstream
        // release at all: the upstream table is missing the build.
        let sparse_upstream =
            ReleaseSet::from_table(&[("v0.1.0", "2020-01-01T00:00:00Z")]).unwrap();
        let date = parse_timestamp("2024-10-10T00:00:00Z").unwrap();
        let err = resolve_coverage(date, &sparse_upstream, &downstream()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::EmptyCoveredRange {
                first_covered: "v0.12.0-rc2".to_string()
            }
        );
    }
}
