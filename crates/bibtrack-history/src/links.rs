//! Browsable URLs for enriched records.

use bibtrack_core::SourceRef;

/// Browsable page for the engine build a descriptor points at: the release
/// page for tags, the tree at the pinned commit for branch builds.
pub fn source_url(source: &str, source_ref: &SourceRef) -> String {
    let base = source.strip_prefix("git+").unwrap_or(source);
    let base = base
        .split_once('?')
        .map(|(b, _)| b)
        .unwrap_or(base)
        .trim_end_matches('/');
    match source_ref {
        SourceRef::Tag { tag } => format!("{base}/releases/tag/{tag}"),
        SourceRef::Branch { commit, .. } => format!("{base}/tree/{commit}"),
    }
}

/// Browsable page for the entries file at the revision the record used.
///
/// `entries_rev` is `owner/repo#rev`; a missing revision yields `None`
/// rather than a dead link.
pub fn entries_url(entries_rev: &str) -> Option<String> {
    let (repo, rev) = entries_rev.split_once('#')?;
    Some(format!(
        "https://github.com/{repo}/blob/{rev}/lib/data/items/gbt7714-data.json"
    ))
}
