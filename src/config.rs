// Persisted chart configuration model

use crate::filter::FilterClause;
use serde::Deserialize;

/// Chart types the dashboard exposes. Every kind consumes the same series
/// shapes, so the kind never reaches the aggregation core; it travels with
/// the config so the rendering layer can pick its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Radar,
    Radial,
    Heatmap,
}

/// Bucket (or legend) ordering requested by the user. Sorting is always by
/// label, never by a series value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
    #[default]
    None,
}

/// X-axis selection: the source column plus the requested bucket order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisSpec {
    pub column: String,
    #[serde(default)]
    pub sort: SortOrder,
}

/// Y-axis selection, persisted as a bare string where the literal `count`
/// is the record-count sentinel and anything else names a column. The
/// sentinel shadows a real column named `count`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum YAxis {
    Count,
    Column(String),
}

impl From<String> for YAxis {
    fn from(value: String) -> Self {
        if value == "count" {
            YAxis::Count
        } else {
            YAxis::Column(value)
        }
    }
}

/// Everything one chart widget persists about its data shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub kind: ChartKind,
    pub x_axis: AxisSpec,
    pub y_axis: YAxis,
    /// Legend (series key) ordering; bucket order lives on `x_axis`.
    #[serde(default)]
    pub y_sort: SortOrder,
    #[serde(default)]
    pub filters: Vec<FilterClause>,
    #[serde(default)]
    pub omit_zero: bool,
}
