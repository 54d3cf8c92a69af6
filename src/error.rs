// Typed configuration errors raised by the aggregation engine

use crate::schema::ColumnType;
use std::fmt;
use thiserror::Error;

/// Which axis an error is talking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    X,
    Y,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => f.write_str("x"),
            AxisRole::Y => f.write_str("y"),
        }
    }
}

/// The requested axis column does not exist in the schema, or its declared
/// type cannot anchor the x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column '{0}' does not exist in the schema")]
    UnknownColumn(String),
    #[error("column '{column}' has type {column_type}; the x-axis needs a select, status, or multi_select column")]
    NotCategorical {
        column: String,
        column_type: ColumnType,
    },
}

/// Failure modes of [`aggregate`](crate::aggregate::aggregate).
///
/// Both kinds mean the axis selection is invalid, not that anything
/// transient went wrong: callers should surface a "change your axis
/// configuration" state rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("no aggregation strategy for {axis}-axis '{column}' of type {column_type}")]
    UnsupportedAxisType {
        axis: AxisRole,
        column: String,
        column_type: ColumnType,
    },
}
