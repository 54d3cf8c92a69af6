// Library exports for chartfold

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod parser;
pub mod postprocess;
pub mod record;
pub mod resolve;
pub mod schema;
pub mod series;

// Public API re-exports
pub use aggregate::aggregate;
pub use config::{AxisSpec, ChartConfig, ChartKind, SortOrder, YAxis};
pub use dataset::Dataset;
pub use error::{AggregateError, AxisRole, SchemaError};
pub use filter::{apply_filters, FilterClause, FilterOp};
pub use postprocess::post_process;
pub use record::{extract_value, FieldValue, Record};
pub use resolve::chart_series;
pub use schema::{ColumnSchema, ColumnType, Schema, SelectOption};
pub use series::{initialize_buckets, Bucket, SeriesResult};
