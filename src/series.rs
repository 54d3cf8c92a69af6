// Output series structure and schema-derived bucket initialization

use crate::error::{AggregateError, SchemaError};
use crate::schema::Schema;
use serde::Serialize;
use std::collections::BTreeMap;

/// One output row of an aggregated series, keyed by lower-cased x category.
/// Serializes flat: `{"class": "done", "count": 3.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub class: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl Bucket {
    fn zeroed(class: String, series_keys: &[String]) -> Self {
        let values = series_keys.iter().map(|key| (key.clone(), 0.0)).collect();
        Bucket { class, values }
    }

    /// Current value for a series key, `0.0` if the key is not carried.
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Add `delta` to an existing series key. Unknown keys are dropped:
    /// the key set is fixed at initialization, never grown from data.
    pub(crate) fn bump(&mut self, key: &str, delta: f64) {
        if let Some(value) = self.values.get_mut(key) {
            *value += delta;
        }
    }

    /// True when every series value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.values.values().all(|value| *value == 0.0)
    }
}

/// The plottable result of one aggregation call: buckets in their final
/// order plus the series keys present in every bucket (legend entries, in
/// render order). Constructed fresh per call; never aliases the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub buckets: Vec<Bucket>,
    pub series_keys: Vec<String>,
}

/// Build one zero-filled bucket per declared option of the x-axis column,
/// in schema declaration order.
///
/// Buckets are derived from the schema alone, so every legal category
/// appears in the output even when no record mentions it. Classes are
/// unique: options differing only by case collapse into the first
/// occurrence.
pub fn initialize_buckets(
    schema: &Schema,
    x_column: &str,
    series_keys: &[String],
) -> Result<Vec<Bucket>, AggregateError> {
    let column = schema
        .column(x_column)
        .ok_or_else(|| SchemaError::UnknownColumn(x_column.to_string()))?;
    if !column.kind.is_categorical() {
        return Err(SchemaError::NotCategorical {
            column: x_column.to_string(),
            column_type: column.kind,
        }
        .into());
    }

    let mut buckets: Vec<Bucket> = Vec::with_capacity(column.options.len());
    for option in &column.options {
        let class = option.name.to_lowercase();
        if buckets.iter().any(|bucket| bucket.class == class) {
            continue;
        }
        buckets.push(Bucket::zeroed(class, series_keys));
    }
    Ok(buckets)
}
