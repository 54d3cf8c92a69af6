// Thin resolver from a persisted chart configuration to its plottable series

use crate::aggregate::aggregate;
use crate::config::{ChartConfig, SortOrder};
use crate::error::AggregateError;
use crate::filter::apply_filters;
use crate::postprocess::post_process;
use crate::record::Record;
use crate::schema::Schema;
use crate::series::SeriesResult;

/// Resolve one chart widget's configuration into its series.
///
/// Glue only: filter the records, hand the axis selection to the
/// aggregation core, apply the post-processing flags, and order the legend.
/// Every chart kind consumes the same series shapes, so kind-specific
/// behavior (geometry, palettes) stays with the caller.
pub fn chart_series(
    schema: &Schema,
    records: &[Record],
    config: &ChartConfig,
) -> Result<SeriesResult, AggregateError> {
    let filtered;
    let records = if config.filters.is_empty() {
        records
    } else {
        filtered = apply_filters(schema, records, &config.filters);
        &filtered[..]
    };

    let result = aggregate(schema, records, &config.x_axis.column, &config.y_axis)?;
    let mut result = post_process(result, config.x_axis.sort, config.omit_zero);

    // Legend ordering sorts the key list by name; bucket cells are keyed by
    // name, so reordering the legend never touches values.
    match config.y_sort {
        SortOrder::Asc => result.series_keys.sort(),
        SortOrder::Desc => {
            result.series_keys.sort();
            result.series_keys.reverse();
        }
        SortOrder::None => {}
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AxisSpec, ChartKind, YAxis};
    use crate::filter::{FilterClause, FilterOp};

    fn make_schema() -> Schema {
        serde_json::from_str(
            r#"{
                "Status": {"type": "status", "options": [{"name": "Todo"}, {"name": "Done"}]},
                "Priority": {"type": "select", "options": [{"name": "Low"}, {"name": "High"}]}
            }"#,
        )
        .unwrap()
    }

    fn make_records() -> Vec<Record> {
        serde_json::from_str(
            r#"[
                {"Status": {"type": "status", "name": "Done"},
                 "Priority": {"type": "select", "name": "High"}},
                {"Status": {"type": "status", "name": "Done"},
                 "Priority": {"type": "select", "name": "Low"}},
                {"Status": {"type": "status", "name": "Todo"},
                 "Priority": {"type": "select", "name": "High"}}
            ]"#,
        )
        .unwrap()
    }

    fn make_config() -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            x_axis: AxisSpec {
                column: "Status".to_string(),
                sort: SortOrder::None,
            },
            y_axis: YAxis::Count,
            y_sort: SortOrder::None,
            filters: Vec::new(),
            omit_zero: false,
        }
    }

    fn classes(result: &SeriesResult) -> Vec<&str> {
        result.buckets.iter().map(|b| b.class.as_str()).collect()
    }

    #[test]
    fn test_resolves_count_series() {
        let result = chart_series(&make_schema(), &make_records(), &make_config()).unwrap();
        assert_eq!(classes(&result), vec!["todo", "done"]);
        assert_eq!(result.buckets[1].value("count"), 2.0);
        assert_eq!(result.series_keys, vec!["count"]);
    }

    #[test]
    fn test_applies_bucket_sort_and_omit_zero() {
        let mut config = make_config();
        config.x_axis.sort = SortOrder::Desc;
        config.omit_zero = true;
        config.filters.push(FilterClause {
            column: "Priority".to_string(),
            op: FilterOp::Equals,
            value: "High".to_string(),
        });
        let result = chart_series(&make_schema(), &make_records(), &config).unwrap();
        assert_eq!(classes(&result), vec!["todo", "done"]);
        assert_eq!(result.buckets[0].value("count"), 1.0);
        assert_eq!(result.buckets[1].value("count"), 1.0);
    }

    #[test]
    fn test_filters_drop_records_before_the_fold() {
        let mut config = make_config();
        config.filters.push(FilterClause {
            column: "Priority".to_string(),
            op: FilterOp::Equals,
            value: "High".to_string(),
        });
        let result = chart_series(&make_schema(), &make_records(), &config).unwrap();
        // The Low-priority Done record is gone, but zero-fill still applies
        assert_eq!(result.buckets.len(), 2);
        assert_eq!(result.buckets[1].value("count"), 1.0);
    }

    #[test]
    fn test_legend_ordering_follows_y_sort() {
        let mut config = make_config();
        config.y_axis = YAxis::Column("Priority".to_string());
        config.y_sort = SortOrder::Desc;
        let result = chart_series(&make_schema(), &make_records(), &config).unwrap();
        assert_eq!(result.series_keys, vec!["low", "high"]);
        // Cell values stay keyed by name regardless of legend order
        assert_eq!(result.buckets[1].value("high"), 1.0);
        assert_eq!(result.buckets[1].value("low"), 1.0);
    }

    #[test]
    fn test_schema_errors_pass_through() {
        let mut config = make_config();
        config.x_axis.column = "Missing".to_string();
        assert!(chart_series(&make_schema(), &make_records(), &config).is_err());
    }
}
