//! The generated data module
//!
//! The JSON artifact consumed by the rendering layer: the ordered category
//! list plus the enriched record sequence. Count maps are emitted as
//! ordered pairs because their order is part of the display contract.

use std::fs;
use std::path::Path;

use serde::Serialize;

use bibtrack_core::Category;

use crate::enrich::{ComparisonResult, HistoryRecord};
use crate::errors::{LoadError, Result};

/// Expected-output file name inside a comparison cache directory.
const EXPECTED_OUTPUT: &str = "expected-output.txt";
/// Actual-output file name inside a comparison cache directory.
const ACTUAL_OUTPUT: &str = "actual-output.txt";

/// The artifact handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataModule {
    /// All difference categories, in display order.
    pub categories: Vec<Category>,
    /// Enriched records, in file order (oldest first).
    pub records: Vec<HistoryRecord>,
}

impl DataModule {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            records,
        }
    }

    /// Attach the raw comparison texts to the newest record, when the
    /// cache directory still holds both of them. Returns whether a result
    /// was attached.
    ///
    /// # Errors
    ///
    /// `LoadError::Io` when a present cache file cannot be read.
    pub fn attach_latest_result(&mut self, cache_dir: &Path) -> Result<bool> {
        let expected_path = cache_dir.join(EXPECTED_OUTPUT);
        let actual_path = cache_dir.join(ACTUAL_OUTPUT);
        let Some(latest) = self.records.last_mut() else {
            return Ok(false);
        };
        if !expected_path.exists() || !actual_path.exists() {
            tracing::debug!(cache_dir = %cache_dir.display(), "no cached comparison outputs");
            return Ok(false);
        }

        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|e| LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        };
        latest.result = Some(ComparisonResult {
            expected: read(&expected_path)?,
            actual: read(&actual_path)?,
        });
        Ok(true)
    }

    /// Serialize the module to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::parser::parse_history_str;

    fn module() -> DataModule {
        let history = parse_history_str(
            r#"
version = 1

[[record]]
entries_rev = "zotero-chinese/styles#ce0786d7"
csl_updated_at = "2024-06-20T18:30:00+08:00"
hayagriva_source = "git+https://github.com/typst/hayagriva?tag=v0.8.0"

[record.output]
n_entries = 112
n_diff = 1

[record.output.diff_counts]
lang = 1

[record.output.cause_counts]
lang = 1
"#,
        )
        .unwrap();
        DataModule::new(enrich(history).unwrap())
    }

    #[test]
    fn test_categories_serialized_in_display_order() {
        let json = module().to_json().unwrap();
        let lang = json.find("\"lang\"").unwrap();
        let unknown = json.find("\"Unknown\"").unwrap();
        assert!(lang < unknown);
    }

    #[test]
    fn test_serialization_is_byte_stable() {
        assert_eq!(module().to_json().unwrap(), module().to_json().unwrap());
    }

    #[test]
    fn test_attach_skips_when_cache_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut module = module();
        assert!(!module.attach_latest_result(dir.path()).unwrap());
        assert!(module.records[0].result.is_none());
    }

    #[test]
    fn test_attach_requires_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(EXPECTED_OUTPUT), "[1] a.\n").unwrap();
        let mut module = module();
        assert!(!module.attach_latest_result(dir.path()).unwrap());
    }

    #[test]
    fn test_attach_sets_latest_record_result() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(EXPECTED_OUTPUT), "[1] a.\n").unwrap();
        fs::write(dir.path().join(ACTUAL_OUTPUT), "[1] b.\n").unwrap();

        let mut module = module();
        assert!(module.attach_latest_result(dir.path()).unwrap());
        let result = module.records[0].result.as_ref().unwrap();
        assert_eq!(result.expected, "[1] a.\n");
        assert_eq!(result.actual, "[1] b.\n");
    }
}
