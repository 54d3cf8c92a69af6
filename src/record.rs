// Raw records and the typed accessor that normalizes their fields

use crate::schema::ColumnType;
use serde::Deserialize;
use std::collections::HashMap;

/// One stored field value, tagged the way the data source tags it.
///
/// `Absent` covers a missing field, a tag that contradicts the schema, and
/// any source-side value type the engine does not chart (unknown wire tags
/// land here during deserialization).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldValue {
    Select { name: String },
    Status { name: String },
    MultiSelect { names: Vec<String> },
    Number { value: f64 },
    #[serde(other)]
    Absent,
}

impl FieldValue {
    /// The categorical contribution set of this value: one name for
    /// single-valued fields, every selected name for multi_select, nothing
    /// otherwise.
    pub fn category_names(&self) -> &[String] {
        match self {
            FieldValue::Select { name } | FieldValue::Status { name } => {
                std::slice::from_ref(name)
            }
            FieldValue::MultiSelect { names } => names,
            _ => &[],
        }
    }
}

/// One source record: column name -> stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn field(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }
}

/// Extract the value of `column` from `record`, normalized against the
/// column's declared type.
///
/// A missing field or a stored tag that contradicts the schema yields
/// `Absent`, except for a `multi_select` column, which yields an empty
/// selection so downstream fan-out sees zero contributions instead of a
/// null. Pure: no case normalization happens here.
pub fn extract_value(record: &Record, column: &str, kind: ColumnType) -> FieldValue {
    match (kind, record.field(column)) {
        (ColumnType::Select, Some(value @ FieldValue::Select { .. })) => value.clone(),
        (ColumnType::Status, Some(value @ FieldValue::Status { .. })) => value.clone(),
        (ColumnType::MultiSelect, Some(value @ FieldValue::MultiSelect { .. })) => value.clone(),
        (ColumnType::Number, Some(value @ FieldValue::Number { .. })) => value.clone(),
        (ColumnType::MultiSelect, _) => FieldValue::MultiSelect { names: Vec::new() },
        _ => FieldValue::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> Record {
        let json = r#"{
            "Status": {"type": "status", "name": "Done"},
            "Priority": {"type": "select", "name": "High"},
            "Tags": {"type": "multi_select", "names": ["Bug", "Feature"]},
            "Points": {"type": "number", "value": 3.5}
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_matching_types() {
        let record = make_record();
        assert_eq!(
            extract_value(&record, "Status", ColumnType::Status),
            FieldValue::Status { name: "Done".to_string() }
        );
        assert_eq!(
            extract_value(&record, "Points", ColumnType::Number),
            FieldValue::Number { value: 3.5 }
        );
    }

    #[test]
    fn test_extract_missing_field_is_absent() {
        let record = make_record();
        assert_eq!(
            extract_value(&record, "Owner", ColumnType::Select),
            FieldValue::Absent
        );
    }

    #[test]
    fn test_extract_type_mismatch_is_absent() {
        let record = make_record();
        // Stored as status, asked for as select
        assert_eq!(
            extract_value(&record, "Status", ColumnType::Select),
            FieldValue::Absent
        );
    }

    #[test]
    fn test_extract_multi_select_absence_is_empty_set() {
        let record = make_record();
        assert_eq!(
            extract_value(&record, "Owner", ColumnType::MultiSelect),
            FieldValue::MultiSelect { names: Vec::new() }
        );
        // Mismatch behaves the same way
        assert_eq!(
            extract_value(&record, "Points", ColumnType::MultiSelect),
            FieldValue::MultiSelect { names: Vec::new() }
        );
    }

    #[test]
    fn test_category_names_fan_out() {
        let record = make_record();
        let value = extract_value(&record, "Tags", ColumnType::MultiSelect);
        assert_eq!(value.category_names(), &["Bug".to_string(), "Feature".to_string()]);

        let value = extract_value(&record, "Priority", ColumnType::Select);
        assert_eq!(value.category_names(), &["High".to_string()]);

        assert!(FieldValue::Absent.category_names().is_empty());
        assert!(FieldValue::Number { value: 1.0 }.category_names().is_empty());
    }

    #[test]
    fn test_unknown_wire_tag_deserializes_as_absent() {
        let json = r#"{"Created": {"type": "date", "start": "2024-01-01"}}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.field("Created"), Some(&FieldValue::Absent));
    }
}
