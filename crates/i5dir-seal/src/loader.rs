//! Raw record loading from the scraped-input directory.
//!
//! Candidate filenames are tried in a fixed precedence order and every file
//! found contributes records, concatenated file-then-array order. A file
//! that fails to parse is logged and skipped; only a fully empty result is
//! fatal.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::error::SealError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    /// Declared unsupported: logged and skipped so a leftover CSV export
    /// next to the JSON files never aborts a run.
    Csv,
}

/// Candidate input files, in precedence order.
pub const CANDIDATE_SOURCES: [(&str, SourceFormat); 4] = [
    ("businesses.json", SourceFormat::Json),
    ("business-data.json", SourceFormat::Json),
    ("scraped-businesses.json", SourceFormat::Json),
    ("businesses.csv", SourceFormat::Csv),
];

/// Filename of the guidance template written when no records are found.
pub const SAMPLE_TEMPLATE_NAME: &str = "sample-businesses.json";

/// Load every raw record from the candidate files under `input_dir`.
///
/// A top-level JSON object is treated as a one-element sequence; a
/// top-level array contributes its elements in order. Elements are kept as
/// raw [`Value`]s — per-record shape problems are the validator's concern.
///
/// # Errors
///
/// Returns [`SealError::NoRecords`] when every candidate is missing,
/// unsupported, or empty (after writing a sample template into
/// `input_dir`), or [`SealError::Io`] when a present file cannot be read.
pub async fn load_raw_records(input_dir: &Path) -> Result<Vec<Value>, SealError> {
    let mut records = Vec::new();

    for (name, format) in CANDIDATE_SOURCES {
        let path = input_dir.join(name);
        if !path_exists(&path).await {
            continue;
        }
        match format {
            SourceFormat::Csv => {
                warn!(path = %path.display(), "CSV input is not supported; skipping");
                continue;
            }
            SourceFormat::Json => {
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| SealError::io(&path, e))?;
                match serde_json::from_str::<Value>(&content) {
                    Ok(Value::Array(items)) => {
                        info!(path = %path.display(), count = items.len(), "loaded records");
                        records.extend(items);
                    }
                    Ok(single) => {
                        info!(path = %path.display(), "loaded single-object record");
                        records.push(single);
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "unparseable JSON; skipping file");
                    }
                }
            }
        }
    }

    if records.is_empty() {
        let sample = write_sample_template(input_dir).await?;
        let tried = CANDIDATE_SOURCES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(SealError::NoRecords {
            dir: input_dir.to_path_buf(),
            tried,
            sample,
        });
    }

    Ok(records)
}

async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Write a one-record template showing the expected input shape. Returned
/// path is embedded in the fatal error so the operator can find it.
async fn write_sample_template(input_dir: &Path) -> Result<PathBuf, SealError> {
    let sample = serde_json::json!([{
        "name": "Example Electric Co",
        "phone": "(503) 555-0100",
        "email": "office@example-electric.com",
        "website": "https://example-electric.com",
        "address": {
            "street": "100 SW Main St",
            "city": "Portland",
            "state": "OR",
            "zipCode": "97204"
        },
        "industry": "electricians",
        "services": ["Panel upgrades", "Rewiring"],
        "rating": 4.8,
        "reviewCount": 57,
        "licenseNumber": "CCB-123456",
        "yearsInBusiness": 12,
        "emergencyService": true,
        "bbbRating": "A+"
    }]);

    tokio::fs::create_dir_all(input_dir)
        .await
        .map_err(|e| SealError::io(input_dir, e))?;
    let path = input_dir.join(SAMPLE_TEMPLATE_NAME);
    let body = serde_json::to_string_pretty(&sample).map_err(|e| SealError::Serialize { source: e })?;
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| SealError::io(&path, e))?;
    warn!(path = %path.display(), "wrote sample input template");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[tokio::test]
    async fn loads_array_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "businesses.json", r#"[{"name":"A"},{"name":"B"}]"#);
        let records = load_raw_records(dir.path()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "A");
        assert_eq!(records[1]["name"], "B");
    }

    #[tokio::test]
    async fn wraps_single_object_as_one_record() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "business-data.json", r#"{"name":"Solo"}"#);
        let records = load_raw_records(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Solo");
    }

    #[tokio::test]
    async fn concatenates_candidates_in_precedence_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "business-data.json", r#"[{"name":"Second"}]"#);
        write_file(dir.path(), "businesses.json", r#"[{"name":"First"}]"#);
        let records = load_raw_records(dir.path()).await.unwrap();
        assert_eq!(records[0]["name"], "First");
        assert_eq!(records[1]["name"], "Second");
    }

    #[tokio::test]
    async fn skips_csv_candidate() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "businesses.csv", "name,phone\nA,555\n");
        write_file(dir.path(), "businesses.json", r#"[{"name":"A"}]"#);
        let records = load_raw_records(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn skips_unparseable_json_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "businesses.json", "{not json");
        write_file(dir.path(), "business-data.json", r#"[{"name":"Kept"}]"#);
        let records = load_raw_records(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Kept");
    }

    #[tokio::test]
    async fn empty_input_is_fatal_and_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raw_records(dir.path()).await.unwrap_err();
        match err {
            SealError::NoRecords { sample, .. } => {
                assert!(sample.exists());
                let body = std::fs::read_to_string(sample).unwrap();
                let parsed: Value = serde_json::from_str(&body).unwrap();
                assert!(parsed.is_array());
            }
            other => panic!("expected NoRecords, got {other}"),
        }
    }
}
