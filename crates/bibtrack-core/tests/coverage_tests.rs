//! Coverage resolution over realistic release timelines.

use bibtrack_core::release::parse_timestamp;
use bibtrack_core::{resolve_coverage, ReleaseSet};
use chrono::{DateTime, TimeZone, Utc};

/// A slice of the real upstream timeline around the v0.8.0 release.
fn upstream() -> ReleaseSet {
    ReleaseSet::from_table(&[
        ("v0.8.1", "2025-02-05T11:15:17Z"),
        ("v0.8.0", "2024-10-15T13:48:43Z"),
        ("v0.7.0", "2024-10-03T14:54:02Z"),
        ("v0.6.0", "2024-10-02T13:29:23Z"),
        ("v0.5.3", "2024-05-16T10:23:58Z"),
        ("v0.1.0", "2021-01-18T10:13:34Z"),
    ])
    .unwrap()
}

/// The matching slice of the downstream timeline.
fn downstream() -> ReleaseSet {
    ReleaseSet::from_table(&[
        ("v0.13.0-rc1", "2025-02-05T17:31:03Z"),
        ("v0.12.0", "2024-10-18T21:41:48Z"),
        ("v0.12.0-rc2", "2024-10-15T14:28:05Z"),
        ("v0.12.0-rc1", "2024-10-03T21:52:10Z"),
        ("v0.11.1", "2024-05-17T15:33:15Z"),
    ])
    .unwrap()
}

#[test]
fn test_v080_first_covered_by_rc2() {
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
fn test_range_spans_releases_in_one_window() {
    // v0.6.0 and v0.7.0 both land inside the v0.12.0-rc1 window.
    let date = parse_timestamp("2024-10-02T13:29:23Z").unwrap();
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
fn test_release_predating_all_windows_is_uncovered() {
    // v0.1.0 predates the oldest downstream release; nothing covers it.
    let date = parse_timestamp("2021-01-18T10:13:34Z").unwrap();
    assert_eq!(
        resolve_coverage(date, &upstream(), &downstream()).unwrap(),
        None
    );
}

#[test]
fn test_resolution_is_reproducible() {
    let date = parse_timestamp("2024-10-15T13:48:43Z").unwrap();
    let first = resolve_coverage(date, &upstream(), &downstream()).unwrap();
    let second = resolve_coverage(date, &upstream(), &downstream()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_upstream_release_covered_by_at_most_one_window() {
    let upstream = upstream();
    let downstream = downstream();
    for release in upstream.iter() {
        let windows_containing = downstream
            .as_slice()
            .windows(2)
            .filter(|pair| {
                pair[0].published_at >= release.published_at
                    && release.published_at > pair[1].published_at
            })
            .count();
        assert!(
            windows_containing <= 1,
            "{} falls into {} windows",
            release.tag,
            windows_containing
        );
    }
}

mod partition_property {
    use super::*;
    use proptest::prelude::*;

    fn timeline(seconds: Vec<i64>) -> ReleaseSet {
        let mut seconds = seconds;
        seconds.sort_unstable();
        seconds.dedup();
        seconds.reverse();
        let releases = seconds
            .into_iter()
            .enumerate()
            .map(|(i, s)| bibtrack_core::Release {
                tag: format!("v{i}"),
                published_at: Utc.timestamp_opt(s, 0).unwrap(),
            })
            .collect();
        ReleaseSet::new(releases).unwrap()
    }

    proptest! {
        /// Windows partition the timeline: a probe date matches at most one
        /// adjacent pair, and the resolver agrees with the manual scan.
        #[test]
        fn windows_never_overlap(
            seconds in proptest::collection::vec(0i64..100_000, 2..20),
            probe in 0i64..100_000,
        ) {
            let table = timeline(seconds);
            let date: DateTime<Utc> = Utc.timestamp_opt(probe, 0).unwrap();

            let matching: Vec<&str> = table
                .as_slice()
                .windows(2)
                .filter(|pair| {
                    pair[0].published_at >= date && date > pair[1].published_at
                })
                .map(|pair| pair[0].tag.as_str())
                .collect();
            prop_assert!(matching.len() <= 1);

            // With upstream == downstream the matched window always holds
            // its own newer endpoint, so resolution never errors.
            let coverage = resolve_coverage(date, &table, &table).unwrap();
            match (coverage, matching.first()) {
                (Some(cov), Some(tag)) => prop_assert_eq!(cov.first_covered.as_str(), *tag),
                (None, None) => {}
                (got, want) => prop_assert!(false, "resolver {:?} vs scan {:?}", got, want),
            }
        }
    }
}
