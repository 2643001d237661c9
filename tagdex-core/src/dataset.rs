//! Dataset decoding and status normalization.
//!
//! The dataset is a trusted, author-controlled JSON resource. The only
//! structural validation is the top-level array-shape check; individual
//! records tolerate missing fields.

use thiserror::Error;

use crate::types::ElementRecord;

/// Status assigned to records whose wire value is absent or empty.
pub const DEFAULT_STATUS: &str = "standard";

/// Failures while loading the element dataset.
///
/// Every failure - transport, payload, shape - funnels into the same
/// user-visible "failed to load" path.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Transport-level failure fetching the resource.
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
    /// The payload was not valid JSON, or a record had the wrong shape.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// The JSON payload's top level was not an array.
    #[error("dataset root is not an array")]
    NotAnArray,
}

/// Normalize a raw status label: trimmed, lower-cased,
/// [`DEFAULT_STATUS`] when nothing remains.
pub fn normalize_status(raw: &str) -> String {
    let status = raw.trim().to_lowercase();
    if status.is_empty() {
        DEFAULT_STATUS.to_string()
    } else {
        status
    }
}

/// Decode the dataset payload into normalized records.
pub fn parse_dataset(text: &str) -> Result<Vec<ElementRecord>, DatasetError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(DatasetError::NotAnArray);
    }

    let mut records: Vec<ElementRecord> = serde_json::from_value(value)?;
    for record in &mut records {
        record.status = normalize_status(&record.status);
    }
    Ok(records)
}

/// Distinct normalized statuses present in the dataset, sorted.
///
/// Drives the filter chip row, so chips never point at a status no
/// record carries.
pub fn distinct_statuses(records: &[ElementRecord]) -> Vec<String> {
    let mut statuses: Vec<String> = records.iter().map(|r| r.status.clone()).collect();
    statuses.sort();
    statuses.dedup();
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_status("  Deprecated "), "deprecated");
        assert_eq!(normalize_status("STANDARD"), "standard");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  Deprecated ", "", "experimental", " MIXED Case "] {
            let once = normalize_status(raw);
            assert_eq!(normalize_status(&once), once);
        }
    }

    #[test]
    fn absent_or_empty_status_defaults_to_standard() {
        let records = parse_dataset(
            r#"[
                {"name": "div"},
                {"name": "span", "status": ""},
                {"name": "center", "status": "  "}
            ]"#,
        )
        .unwrap();

        assert!(records.iter().all(|r| r.status == "standard"));
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_dataset(r#"{"name": "div"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_dataset("[{").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn tolerates_missing_record_fields() {
        let records = parse_dataset(r#"[{"name": "div"}]"#).unwrap();

        assert_eq!(records[0].name, "div");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].default_css, "");
        assert_eq!(records[0].spec_url, "");
    }

    #[test]
    fn distinct_statuses_are_sorted_and_deduped() {
        let records = parse_dataset(
            r#"[
                {"name": "div", "status": "standard"},
                {"name": "marquee", "status": "Deprecated"},
                {"name": "span", "status": "standard"},
                {"name": "portal", "status": "experimental"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            distinct_statuses(&records),
            vec!["deprecated", "experimental", "standard"]
        );
    }
}
