//! Release tables and commit dates
//!
//! Both tables are hand-maintained fixtures; construction validates the
//! invariants the interval scan in [`crate::coverage`] depends on.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::errors::{ResolveError, Result};

/// A tagged release with its publication timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag: String,
    pub published_at: DateTime<Utc>,
}

/// An ordered collection of releases, newest first.
///
/// Strictly descending publication times are a construction invariant.
#[derive(Debug, Clone)]
pub struct ReleaseSet {
    releases: Vec<Release>,
}

impl ReleaseSet {
    /// Build a release set, validating the newest-first ordering.
    pub fn new(releases: Vec<Release>) -> Result<Self> {
        for pair in releases.windows(2) {
            if pair[0].published_at <= pair[1].published_at {
                return Err(ResolveError::UnsortedReleases {
                    tag: pair[1].tag.clone(),
                });
            }
        }
        Ok(Self { releases })
    }

    /// Build from `(tag, RFC 3339 timestamp)` rows, newest first.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self> {
        let releases = table
            .iter()
            .map(|(tag, published_at)| {
                Ok(Release {
                    tag: (*tag).to_string(),
                    published_at: parse_timestamp(published_at)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(releases)
    }

    /// Publication timestamp of an exact tag, if the tag is known.
    pub fn date_of(&self, tag: &str) -> Option<DateTime<Utc>> {
        self.releases
            .iter()
            .find(|r| r.tag == tag)
            .map(|r| r.published_at)
    }

    /// Releases newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.releases.iter()
    }

    /// Releases newest first, as a slice.
    pub fn as_slice(&self) -> &[Release] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// Publication dates of branch builds, keyed by 7-character short hash.
#[derive(Debug, Clone, Default)]
pub struct CommitDates {
    dates: HashMap<String, DateTime<Utc>>,
}

impl CommitDates {
    /// Build from `(hash, RFC 3339 timestamp)` rows.
    ///
    /// Hashes longer than 7 characters are shortened; the lookup side is
    /// always the 7-character prefix.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self> {
        let mut dates = HashMap::with_capacity(table.len());
        for (hash, committed_at) in table {
            let short: String = hash.chars().take(7).collect();
            dates.insert(short, parse_timestamp(committed_at)?);
        }
        Ok(Self { dates })
    }

    /// Timestamp for a 7-character short hash, if the hash is known.
    pub fn date_of(&self, short_hash: &str) -> Option<DateTime<Utc>> {
        self.dates.get(short_hash).copied()
    }
}

/// Parse an RFC 3339 timestamp, normalizing the offset to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| ResolveError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
