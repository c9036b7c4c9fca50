//! Loading activity records from disk.
//!
//! Supported layouts:
//! - `.json`: an array of `{"date": "YYYY-MM-DD", "count": n}` objects, or an
//!   object mapping dates to counts
//! - `.jsonl`: one record object per line
//!
//! A record without a usable date, or with a negative count, is kept out of the
//! result and logged. File order is preserved so duplicates resolve to the
//! last occurrence when the index is built.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{parse_date, ActivityRecord};

/// A record as it appears in a file, before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordFile {
    List(Vec<RawRecord>),
    ByDate(serde_json::Map<String, serde_json::Value>),
}

/// Load records from `path`, picking the layout from the file extension.
pub fn load_records(path: &Path) -> Result<Vec<ActivityRecord>> {
    let content = std::fs::read_to_string(path)?;
    let source_name = path.display().to_string();

    let records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl") => parse_jsonl(&content, &source_name)?,
        _ => parse_json(&content, &source_name)?,
    };

    tracing::info!(path = %source_name, records = records.len(), "Loaded activity records");
    Ok(records)
}

/// Parse a JSON document in either the list or the date-keyed layout.
pub fn parse_json(content: &str, source_name: &str) -> Result<Vec<ActivityRecord>> {
    let file: RecordFile = serde_json::from_str(content)?;

    let records = match file {
        RecordFile::List(raw) => raw
            .into_iter()
            .filter_map(|r| validate(r, source_name))
            .collect(),
        RecordFile::ByDate(map) => map
            .into_iter()
            .map(|(date, count)| {
                let count = count.as_i64().ok_or_else(|| Error::Parse {
                    source_name: source_name.to_string(),
                    message: format!("count for {} is not an integer", date),
                })?;
                Ok(validate(
                    RawRecord {
                        date: Some(date),
                        count,
                    },
                    source_name,
                ))
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect(),
    };

    Ok(records)
}

/// Parse JSON Lines, one record object per non-blank line.
pub fn parse_jsonl(content: &str, source_name: &str) -> Result<Vec<ActivityRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let raw: RawRecord = serde_json::from_str(line).map_err(|e| Error::Parse {
            source_name: source_name.to_string(),
            message: format!("line {}: {}", line_no + 1, e),
        })?;

        records.extend(validate(raw, source_name));
    }

    Ok(records)
}

fn validate(raw: RawRecord, source_name: &str) -> Option<ActivityRecord> {
    let Some(date_str) = raw.date else {
        tracing::debug!(source = source_name, "Dropping record without a date");
        return None;
    };

    let Some(date) = parse_date(&date_str) else {
        tracing::warn!(source = source_name, date = %date_str, "Dropping record with unparseable date");
        return None;
    };

    if raw.count < 0 {
        tracing::warn!(source = source_name, %date, count = raw.count, "Dropping record with negative count");
        return None;
    }

    Some(ActivityRecord::new(date, raw.count as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_list_layout() {
        let json = r#"[
            {"date": "2024-01-01", "count": 3},
            {"date": "2024-01-02"},
            {"count": 5},
            {"date": null, "count": 5},
            {"date": "01/03/2024", "count": 5},
            {"date": "2024-01-04", "count": -2},
            {"date": "2024-01-01", "count": 9}
        ]"#;
        let records = parse_json(json, "test").unwrap();

        assert_eq!(
            records,
            vec![
                ActivityRecord::new(date(2024, 1, 1), 3),
                ActivityRecord::new(date(2024, 1, 2), 0),
                ActivityRecord::new(date(2024, 1, 1), 9),
            ]
        );
    }

    #[test]
    fn test_parse_date_keyed_layout() {
        let json = r#"{"2024-01-02": 4, "2024-01-01": 1, "garbage": 3}"#;
        let mut records = parse_json(json, "test").unwrap();
        records.sort_by_key(|r| r.date);

        assert_eq!(
            records,
            vec![
                ActivityRecord::new(date(2024, 1, 1), 1),
                ActivityRecord::new(date(2024, 1, 2), 4),
            ]
        );
    }

    #[test]
    fn test_date_keyed_non_integer_count_is_error() {
        let json = r#"{"2024-01-02": "four"}"#;
        assert!(matches!(
            parse_json(json, "test"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_jsonl() {
        let content = "{\"date\":\"2024-05-01\",\"count\":2}\n\n{\"count\":1}\n{\"date\":\"2024-05-02\",\"count\":0}\n";
        let records = parse_jsonl(content, "test").unwrap();

        assert_eq!(
            records,
            vec![
                ActivityRecord::new(date(2024, 5, 1), 2),
                ActivityRecord::new(date(2024, 5, 2), 0),
            ]
        );
    }

    #[test]
    fn test_jsonl_reports_bad_line() {
        let content = "{\"date\":\"2024-05-01\",\"count\":2}\nnot json\n";
        match parse_jsonl(content, "records.jsonl") {
            Err(Error::Parse {
                source_name,
                message,
            }) => {
                assert_eq!(source_name, "records.jsonl");
                assert!(message.starts_with("line 2:"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_records_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();

        let json_path = dir.path().join("records.json");
        std::fs::write(&json_path, r#"[{"date": "2024-02-29", "count": 7}]"#).unwrap();
        assert_eq!(
            load_records(&json_path).unwrap(),
            vec![ActivityRecord::new(date(2024, 2, 29), 7)]
        );

        let jsonl_path = dir.path().join("records.jsonl");
        std::fs::write(&jsonl_path, "{\"date\":\"2024-02-29\",\"count\":7}\n").unwrap();
        assert_eq!(load_records(&jsonl_path).unwrap().len(), 1);

        assert!(matches!(
            load_records(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
