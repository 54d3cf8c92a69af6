// Aggregation engine: dispatch on the axis type pair, fold records into buckets

use crate::config::YAxis;
use crate::error::{AggregateError, AxisRole, SchemaError};
use crate::record::{extract_value, FieldValue, Record};
use crate::schema::{ColumnType, Schema};
use crate::series::{initialize_buckets, SeriesResult};
use std::collections::HashMap;

/// Aggregation strategy selected from the (x type, y type) pair.
#[derive(Clone, Copy)]
enum Strategy<'a> {
    /// Count record contributions per x category.
    Count,
    /// Co-occurrence counts of x categories against y categories.
    CrossTab {
        y_column: &'a str,
        y_kind: ColumnType,
    },
    /// Sum a numeric y column per x category.
    Sum { y_column: &'a str },
}

/// Fold `records` into a zero-filled, schema-ordered series.
///
/// The x-axis column must be categorical (select, status, or multi_select).
/// The y-axis is the `count` sentinel or a column resolving to categorical
/// (cross-tab), number (sum), or the virtual count type; any other
/// combination is rejected before a single record is touched.
///
/// Fold semantics:
/// - a record whose x value is absent contributes nothing;
/// - a multi-valued field fans out: every selected name is credited in
///   full, never divided by the selection count;
/// - cross-tab credits the whole Cartesian product of the two contribution
///   sets, one cell per (x, y) pair;
/// - contribution names are matched against lower-cased bucket classes and
///   series keys; names outside the schema's declared options are silently
///   dropped, so output stays schema-derived.
pub fn aggregate(
    schema: &Schema,
    records: &[Record],
    x_column: &str,
    y_axis: &YAxis,
) -> Result<SeriesResult, AggregateError> {
    let x_schema = schema
        .column(x_column)
        .ok_or_else(|| SchemaError::UnknownColumn(x_column.to_string()))?;
    if !x_schema.kind.is_categorical() {
        return Err(SchemaError::NotCategorical {
            column: x_column.to_string(),
            column_type: x_schema.kind,
        }
        .into());
    }

    let (strategy, series_keys) = match y_axis {
        YAxis::Count => (Strategy::Count, vec!["count".to_string()]),
        YAxis::Column(name) => {
            let y_schema = schema
                .column(name)
                .ok_or_else(|| SchemaError::UnknownColumn(name.clone()))?;
            match y_schema.kind {
                kind if kind.is_categorical() => {
                    let mut keys: Vec<String> = Vec::with_capacity(y_schema.options.len());
                    for option in &y_schema.options {
                        let key = option.name.to_lowercase();
                        if !keys.contains(&key) {
                            keys.push(key);
                        }
                    }
                    (
                        Strategy::CrossTab {
                            y_column: name.as_str(),
                            y_kind: y_schema.kind,
                        },
                        keys,
                    )
                }
                ColumnType::Number => (
                    Strategy::Sum {
                        y_column: name.as_str(),
                    },
                    vec!["sum".to_string()],
                ),
                ColumnType::Count => (Strategy::Count, vec!["count".to_string()]),
                kind => {
                    return Err(AggregateError::UnsupportedAxisType {
                        axis: AxisRole::Y,
                        column: name.clone(),
                        column_type: kind,
                    })
                }
            }
        }
    };

    let mut buckets = initialize_buckets(schema, x_column, &series_keys)?;
    // class -> bucket position; the fold only ever touches classes that exist
    let slots: HashMap<String, usize> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| (bucket.class.clone(), index))
        .collect();

    for record in records {
        let x_value = extract_value(record, x_column, x_schema.kind);
        let x_names = x_value.category_names();
        if x_names.is_empty() {
            continue;
        }

        match strategy {
            Strategy::Count => {
                for x_name in x_names {
                    if let Some(&slot) = slots.get(&x_name.to_lowercase()) {
                        buckets[slot].bump("count", 1.0);
                    }
                }
            }
            Strategy::CrossTab { y_column, y_kind } => {
                let y_value = extract_value(record, y_column, y_kind);
                let y_names = y_value.category_names();
                for x_name in x_names {
                    if let Some(&slot) = slots.get(&x_name.to_lowercase()) {
                        for y_name in y_names {
                            buckets[slot].bump(&y_name.to_lowercase(), 1.0);
                        }
                    }
                }
            }
            Strategy::Sum { y_column } => {
                // Only a well-typed numeric value contributes; an absent or
                // mistyped y leaves the record's buckets untouched.
                if let FieldValue::Number { value } =
                    extract_value(record, y_column, ColumnType::Number)
                {
                    for x_name in x_names {
                        if let Some(&slot) = slots.get(&x_name.to_lowercase()) {
                            buckets[slot].bump("sum", value);
                        }
                    }
                }
            }
        }
    }

    Ok(SeriesResult {
        buckets,
        series_keys,
    })
}
