// Input payload handed over by the external data source

use crate::record::Record;
use crate::schema::Schema;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;

/// One fetched snapshot of an external database: its column schema plus the
/// records to aggregate. The engine never refetches or pages; callers hand
/// it a complete in-memory set.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub schema: Schema,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Invalid dataset JSON")
    }

    /// Parse a dataset from a reader (e.g. stdin).
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("Invalid dataset JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use crate::schema::ColumnType;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "schema": {
                "Status": {"type": "status", "options": [{"name": "Done"}]},
                "Name": {"type": "title"}
            },
            "records": [
                {"Status": {"type": "status", "name": "Done"},
                 "Name": {"type": "title", "text": "Fix login crash"}}
            ]
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.records.len(), 1);
        // Unsupported column types and value tags survive parsing
        assert_eq!(
            dataset.schema.column("Name").unwrap().kind,
            ColumnType::Unsupported
        );
        assert_eq!(
            dataset.records[0].field("Name"),
            Some(&FieldValue::Absent)
        );
    }

    #[test]
    fn test_records_default_to_empty() {
        let dataset = Dataset::from_json_str(r#"{"schema": {}}"#).unwrap();
        assert!(dataset.records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Dataset::from_json_str("{").is_err());
        assert!(Dataset::from_json_str(r#"{"records": []}"#).is_err());
    }
}
