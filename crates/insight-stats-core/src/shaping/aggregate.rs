use statrs::statistics::{Data, Median, Statistics};
use tracing::debug;

use crate::data::Dataset;
use crate::types::{Reduction, Value};
use crate::StatsResult;

impl Reduction {
    /// Reduce `values`, skipping NaN
    ///
    /// Sum and count of nothing are 0; every other reduction of nothing is NaN.
    pub fn apply(&self, values: &[f64]) -> f64 {
        let clean: Vec<f64> = values.iter().copied().filter(|x| !x.is_nan()).collect();
        if clean.is_empty() {
            return match self {
                Reduction::Sum | Reduction::Count => 0.0,
                _ => f64::NAN,
            };
        }
        match self {
            Reduction::Sum => clean.iter().sum(),
            Reduction::Mean => clean.iter().mean(),
            Reduction::Median => Data::new(clean).median(),
            Reduction::Min => Statistics::min(clean.iter()),
            Reduction::Max => Statistics::max(clean.iter()),
            Reduction::Count => clean.len() as f64,
        }
    }
}

/// Sum and mean of each metric per distinct value of `group_column`
///
/// Groups come out in ascending key order and rows with a missing key are
/// dropped. Missing metric values are skipped, so each mean is the group sum over
/// the group's non-missing count. The output holds `group_column` followed by
/// `<metric>_sum` and `<metric>_mean` for every metric, in the order given.
pub fn aggregate_by_group(
    data: &Dataset,
    group_column: &str,
    metrics: &[&str],
) -> StatsResult<Dataset> {
    data.require_columns(&[group_column])?;
    data.require_columns(metrics)?;

    let groups = data.group_indices(group_column)?;
    let keys: Vec<Value> = groups.keys().cloned().collect();
    let mut out = Dataset::new().with_column(group_column, keys)?;

    for metric in metrics {
        let values = data.numeric_values(metric)?;
        let (sums, means): (Vec<Value>, Vec<Value>) = groups
            .values()
            .map(|rows| {
                let group: Vec<f64> = rows.iter().map(|&i| values[i]).collect();
                (
                    Value::Number(Reduction::Sum.apply(&group)),
                    Value::Number(Reduction::Mean.apply(&group)),
                )
            })
            .unzip();
        out = out
            .with_column(format!("{metric}_sum"), sums)?
            .with_column(format!("{metric}_mean"), means)?;
    }

    debug!(
        group_column,
        groups = groups.len(),
        metrics = metrics.len(),
        "aggregated by group",
    );
    Ok(out)
}

/// Reduce `metric_col` over the rows where `column == condition`
///
/// Missing cells in `column` never match, not even a `Value::Null` condition.
///
/// Operation names from user input should go through `str::parse::<Reduction>`,
/// which rejects unknown names with
/// [`StatsError::UnknownOperation`](crate::StatsError::UnknownOperation).
///
/// # Returns
/// The reduced value; with no matching rows, 0 for sum/count and NaN otherwise
pub fn compute_metric(
    data: &Dataset,
    column: &str,
    condition: &Value,
    metric_col: &str,
    operation: Reduction,
) -> StatsResult<f64> {
    data.require_columns(&[column, metric_col])?;
    let values = data.numeric_values(metric_col)?;
    let subset: Vec<f64> = data
        .column(column)?
        .values()
        .iter()
        .zip(values)
        .filter(|(v, _)| !v.is_null() && *v == condition)
        .map(|(_, x)| x)
        .collect();
    Ok(operation.apply(&subset))
}
