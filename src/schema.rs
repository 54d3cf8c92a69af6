// Source database schema: column types and their enumerated options

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Column types the engine can chart. Every other type a source exposes
/// (dates, text, formulas, ...) collapses into `Unsupported`: such columns
/// stay addressable by name but are rejected as axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ColumnType {
    Select,
    Status,
    MultiSelect,
    Number,
    /// Virtual row-count column some sources expose alongside real columns.
    Count,
    Unsupported,
}

impl From<String> for ColumnType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "select" => ColumnType::Select,
            "status" => ColumnType::Status,
            "multi_select" => ColumnType::MultiSelect,
            "number" => ColumnType::Number,
            "count" => ColumnType::Count,
            _ => ColumnType::Unsupported,
        }
    }
}

impl ColumnType {
    /// Categorical types are the only legal x-axes and cross-tab y-axes.
    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            ColumnType::Select | ColumnType::Status | ColumnType::MultiSelect
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Select => "select",
            ColumnType::Status => "status",
            ColumnType::MultiSelect => "multi_select",
            ColumnType::Number => "number",
            ColumnType::Count => "count",
            ColumnType::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// One legal value of a categorical column. Declaration order in the schema
/// fixes bucket emission order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Type and (for categorical columns) the legal value universe of one
/// source column. Values observed in records but missing from `options`
/// never become buckets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSchema {
    #[serde(rename = "type")]
    pub kind: ColumnType,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Column name -> column description. Owned and versioned by the external
/// data source; read-only for this engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub columns: HashMap<String, ColumnSchema>,
}

impl Schema {
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.get(name)
    }
}
