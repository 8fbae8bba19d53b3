//! Hand-maintained release and commit tables.
//!
//! These tables are the source of truth for version resolution and are
//! updated by hand when new releases ship; the loader validates their
//! ordering on every load, so a bad edit fails the next build instead of
//! skewing the chart.

use bibtrack_core::{CommitDates, ReleaseSet, Result};

// To update:
//   gh release list --repo typst/hayagriva --json tagName,publishedAt --limit 3
// Note that the order matters: newest first.
const HAYAGRIVA_TAGS: &[(&str, &str)] = &[
    ("v0.9.1", "2025-09-26T16:04:05Z"),
    ("v0.9.0", "2025-09-25T17:26:32Z"),
    ("v0.8.1", "2025-02-05T11:15:17Z"),
    ("v0.8.0", "2024-10-15T13:48:43Z"),
    ("v0.7.0", "2024-10-03T14:54:02Z"),
    ("v0.6.0", "2024-10-02T13:29:23Z"),
    ("v0.5.3", "2024-05-16T10:23:58Z"),
    ("v0.5.2", "2024-03-07T16:05:01Z"),
    ("v0.5.1", "2023-11-29T17:37:41Z"),
    ("v0.5.0", "2023-11-24T15:10:05Z"),
    ("v0.4.0", "2023-10-31T00:21:37Z"),
    ("v0.3.2", "2023-09-05T10:16:21Z"),
    ("v0.3.1", "2023-09-05T09:53:21Z"),
    ("v0.3.0", "2023-04-04T15:57:53Z"),
    ("v0.2.1", "2023-03-28T13:46:35Z"),
    ("v0.2", "2023-03-28T13:45:38Z"),
    ("v0.1.1", "2021-01-18T15:40:31Z"),
    ("v0.1.0", "2021-01-18T10:13:34Z"),
];

// To update:
//   git log -1 --format='%h %ad' --date=iso-strict <COMMIT-HASH>
// In the typst/hayagriva repo, author dates and committer dates are
// usually the same dates in different timezones.
const HAYAGRIVA_COMMITS: &[(&str, &str)] = &[
    ("a2bfce8", "2025-12-21T06:07:37+01:00"),
    ("a137441", "2025-12-27T22:30:59Z"),
];

// To update:
//   gh release list --repo typst/typst --json tagName,publishedAt --limit 3
// Note that the order matters: newest first.
const TYPST_TAGS: &[(&str, &str)] = &[
    ("v0.14.2", "2025-12-12T17:49:37Z"),
    ("v0.14.1", "2025-12-03T17:10:21Z"),
    ("v0.14.0", "2025-10-24T12:27:35Z"),
    ("v0.14.0-rc.2", "2025-10-17T16:54:42Z"),
    ("v0.14.0-rc.1", "2025-10-10T12:54:29Z"),
    ("v0.13.1", "2025-03-07T12:50:41Z"),
    ("v0.13.0", "2025-02-19T16:25:41Z"),
    ("v0.13.0-rc1", "2025-02-05T17:31:03Z"),
    ("v0.12.0", "2024-10-18T21:41:48Z"),
    ("v0.12.0-rc2", "2024-10-15T14:28:05Z"),
    ("v0.12.0-rc1", "2024-10-03T21:52:10Z"),
    ("v0.11.1", "2024-05-17T15:33:15Z"),
    ("v0.11.0", "2024-03-15T18:05:50Z"),
    ("v0.11.0-rc1", "2024-03-09T18:29:10Z"),
    ("v0.10.0", "2023-12-04T15:51:31Z"),
    ("v0.9.0", "2023-10-31T01:32:16Z"),
    ("v0.8.0", "2023-09-13T15:45:00Z"),
    ("v0.7.0", "2023-08-07T16:20:37Z"),
    ("v0.6.0", "2023-06-30T15:04:25Z"),
    ("v0.5.0", "2023-06-09T14:55:29Z"),
    ("v0.4.0", "2023-05-20T20:40:20Z"),
    ("v0.3.0", "2023-04-26T14:20:47Z"),
    ("v0.2.0", "2023-04-11T20:39:55Z"),
    ("v0.1.0", "2023-04-04T23:46:28Z"),
    ("v23-03-28", "2023-03-28T07:46:54Z"),
    ("v23-03-21-2", "2023-03-21T22:21:52Z"),
    ("v23-03-21", "2023-03-21T17:23:21Z"),
];

/// The hayagriva release table, newest first.
pub fn hayagriva_releases() -> Result<ReleaseSet> {
    ReleaseSet::from_table(HAYAGRIVA_TAGS)
}

/// Dates of hayagriva branch builds referenced by the history.
pub fn hayagriva_commits() -> Result<CommitDates> {
    CommitDates::from_table(HAYAGRIVA_COMMITS)
}

/// The typst release table, newest first.
pub fn typst_releases() -> Result<ReleaseSet> {
    ReleaseSet::from_table(TYPST_TAGS)
}
