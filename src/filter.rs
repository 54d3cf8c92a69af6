// Pre-aggregation record filtering

use crate::record::{extract_value, FieldValue, Record};
use crate::schema::{ColumnType, Schema};
use serde::Deserialize;

/// Filter operations offered by the chart editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    IsEmpty,
    IsNotEmpty,
}

/// One user-entered filter clause. Clauses combine conjunctively: a record
/// must satisfy every clause to reach the aggregation fold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub op: FilterOp,
    #[serde(default)]
    pub value: String,
}

impl FilterClause {
    /// Test one record. Matching runs on the extracted field value, so a
    /// stored type that contradicts the schema behaves exactly like an
    /// absent field, and a clause on an unknown column sees `Absent`.
    pub fn matches(&self, schema: &Schema, record: &Record) -> bool {
        let kind = schema
            .column(&self.column)
            .map(|column| column.kind)
            .unwrap_or(ColumnType::Unsupported);
        let value = extract_value(record, &self.column, kind);
        match self.op {
            FilterOp::Equals => equals(&value, &self.value),
            FilterOp::NotEquals => !equals(&value, &self.value),
            FilterOp::Contains => contains(&value, &self.value),
            FilterOp::NotContains => !contains(&value, &self.value),
            FilterOp::IsEmpty => is_empty(&value),
            FilterOp::IsNotEmpty => !is_empty(&value),
        }
    }
}

fn equals(value: &FieldValue, needle: &str) -> bool {
    match value {
        FieldValue::Select { name } | FieldValue::Status { name } => {
            name.eq_ignore_ascii_case(needle)
        }
        FieldValue::MultiSelect { names } => {
            names.iter().any(|name| name.eq_ignore_ascii_case(needle))
        }
        FieldValue::Number { value } => needle
            .trim()
            .parse::<f64>()
            .map(|parsed| parsed == *value)
            .unwrap_or(false),
        FieldValue::Absent => false,
    }
}

fn contains(value: &FieldValue, needle: &str) -> bool {
    match value {
        FieldValue::Select { name } | FieldValue::Status { name } => {
            name.to_lowercase().contains(&needle.to_lowercase())
        }
        FieldValue::MultiSelect { names } => {
            names.iter().any(|name| name.eq_ignore_ascii_case(needle))
        }
        _ => false,
    }
}

fn is_empty(value: &FieldValue) -> bool {
    match value {
        FieldValue::Absent => true,
        FieldValue::MultiSelect { names } => names.is_empty(),
        _ => false,
    }
}

/// Keep every record that satisfies all clauses.
pub fn apply_filters(schema: &Schema, records: &[Record], clauses: &[FilterClause]) -> Vec<Record> {
    records
        .iter()
        .filter(|record| clauses.iter().all(|clause| clause.matches(schema, record)))
        .cloned()
        .collect()
}
