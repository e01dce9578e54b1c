use tracing::debug;

use crate::data::Dataset;
use crate::types::{SegmentOptions, Value};
use crate::{StatsError, StatsResult};

/// Split rows into two groups by membership of `column` in two value sets
///
/// Overlapping value sets put the shared rows in both groups unless
/// `options.require_disjoint` is set, in which case any shared value fails with
/// [`StatsError::OverlappingSegments`].
///
/// # Returns
/// `(group_a, group_b)`, each keeping the source row order
pub fn segment_data(
    data: &Dataset,
    column: &str,
    values_group_a: &[Value],
    values_group_b: &[Value],
    options: &SegmentOptions,
) -> StatsResult<(Dataset, Dataset)> {
    data.require_columns(&[column])?;

    if options.require_disjoint && values_group_a.iter().any(|v| values_group_b.contains(v)) {
        return Err(StatsError::OverlappingSegments {
            column: column.to_owned(),
        });
    }

    let in_set = |set: &[Value]| {
        data.filter(|row| row.get(column).is_some_and(|v| set.contains(v)))
    };
    let group_a = in_set(values_group_a);
    let group_b = in_set(values_group_b);

    debug!(
        column,
        rows_a = group_a.n_rows(),
        rows_b = group_b.n_rows(),
        "segmented data"
    );
    Ok((group_a, group_b))
}
