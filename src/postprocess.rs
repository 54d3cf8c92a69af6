// Series post-processing: bucket ordering and zero-bucket removal

use crate::config::SortOrder;
use crate::series::SeriesResult;

/// Apply the requested bucket order and, optionally, drop all-zero buckets.
///
/// Sorting compares class labels byte-wise (locale-naive) and is stable, so
/// applying the same order twice is a no-op. `SortOrder::None` keeps the
/// initializer's schema-declared order. Zero removal runs after sorting and
/// preserves the relative order of survivors: consumers index buckets by
/// class, never by position. This stage never fails.
pub fn post_process(mut result: SeriesResult, sort: SortOrder, omit_zero: bool) -> SeriesResult {
    match sort {
        SortOrder::Asc => result.buckets.sort_by(|a, b| a.class.cmp(&b.class)),
        SortOrder::Desc => result.buckets.sort_by(|a, b| b.class.cmp(&a.class)),
        SortOrder::None => {}
    }
    if omit_zero {
        result.buckets.retain(|bucket| !bucket.is_zero());
    }
    result
}
