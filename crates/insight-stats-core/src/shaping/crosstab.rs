use std::collections::BTreeMap;

use tracing::debug;

use crate::data::{ContingencyTable, Dataset};
use crate::types::Value;
use crate::StatsResult;

/// Cross-tabulate `column1` against `column2 > threshold`
///
/// Rows with a missing `column1` are dropped. A missing `column2` never exceeds
/// the threshold and counts as `false`. Column labels are `false` then `true`,
/// keeping only the levels that occur; row labels are ascending.
///
/// # Arguments
/// * `df` - Source data
/// * `column1` - Categorical column for the table rows
/// * `column2` - Numeric column compared against `threshold`
/// * `threshold` - Strict lower bound for the `true` level
pub fn generate_contingency_table(
    df: &Dataset,
    column1: &str,
    column2: &str,
    threshold: f64,
) -> StatsResult<ContingencyTable> {
    df.require_columns(&[column1, column2])?;
    let keys = df.column(column1)?.values();
    let flags: Vec<bool> = df
        .numeric_values(column2)?
        .into_iter()
        .map(|x| x > threshold)
        .collect();

    let mut cells: BTreeMap<&Value, [usize; 2]> = BTreeMap::new();
    let mut seen = [false; 2];
    for (key, &flag) in keys.iter().zip(&flags) {
        if key.is_null() {
            continue;
        }
        cells.entry(key).or_default()[usize::from(flag)] += 1;
        seen[usize::from(flag)] = true;
    }

    let levels: Vec<usize> = (0..2).filter(|&l| seen[l]).collect();
    let col_labels: Vec<Value> = levels.iter().map(|&l| Value::Bool(l == 1)).collect();
    let (row_labels, counts): (Vec<Value>, Vec<Vec<usize>>) = cells
        .into_iter()
        .map(|(key, cell)| {
            let row: Vec<usize> = levels.iter().map(|&l| cell[l]).collect();
            (key.clone(), row)
        })
        .unzip();

    let table = ContingencyTable::new(row_labels, col_labels, counts)?;
    debug!(
        column1,
        column2,
        threshold,
        shape = ?table.shape(),
        "contingency table",
    );
    Ok(table)
}
