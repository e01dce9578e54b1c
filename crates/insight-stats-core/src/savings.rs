//! Cost-savings analysis
//!
//! Per-group totals of cost and claims, the resulting savings potential, and a
//! ranking of the groups with the largest savings percentage.

use tracing::debug;

use crate::data::Dataset;
use crate::types::{Reduction, Value};
use crate::StatsResult;

pub const TOTAL_COST: &str = "TotalCost";
pub const TOTAL_CLAIMS: &str = "TotalClaims";
pub const SAVINGS_POTENTIAL: &str = "SavingsPotential";
pub const SAVINGS_PERCENTAGE: &str = "SavingsPercentage";

/// Savings figures for one group
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsRow {
    /// Group key
    pub group: Value,
    /// Sum of the cost column
    pub total_cost: f64,
    /// Sum of the claim column
    pub total_claims: f64,
    /// `total_cost - total_claims`
    pub savings_potential: f64,
    /// `savings_potential / total_cost * 100`, NaN when `total_cost` is zero
    pub savings_percentage: f64,
}

impl SavingsRow {
    fn new(group: Value, total_cost: f64, total_claims: f64) -> Self {
        let savings_potential = total_cost - total_claims;
        let savings_percentage = if total_cost == 0.0 {
            f64::NAN
        } else {
            savings_potential / total_cost * 100.0
        };
        Self {
            group,
            total_cost,
            total_claims,
            savings_potential,
            savings_percentage,
        }
    }
}

/// Savings table, one row per group
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsSummary {
    group_column: String,
    rows: Vec<SavingsRow>,
}

impl SavingsSummary {
    /// Name of the column the groups were taken from
    pub fn group_column(&self) -> &str {
        &self.group_column
    }

    pub fn rows(&self) -> &[SavingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Materialize as a table with the group key as a regular column
    ///
    /// Columns: the group column, `TotalCost`, `TotalClaims`, `SavingsPotential`,
    /// `SavingsPercentage`.
    pub fn to_dataset(&self) -> StatsResult<Dataset> {
        let column = |f: fn(&SavingsRow) -> f64| -> Vec<Value> {
            self.rows.iter().map(|r| Value::Number(f(r))).collect()
        };
        Dataset::new()
            .with_column(
                self.group_column.clone(),
                self.rows.iter().map(|r| r.group.clone()).collect(),
            )?
            .with_column(TOTAL_COST, column(|r: &SavingsRow| r.total_cost))?
            .with_column(TOTAL_CLAIMS, column(|r: &SavingsRow| r.total_claims))?
            .with_column(SAVINGS_POTENTIAL, column(|r: &SavingsRow| r.savings_potential))?
            .with_column(SAVINGS_PERCENTAGE, column(|r: &SavingsRow| r.savings_percentage))
    }
}

/// Total cost and claims per group, with the savings they imply
///
/// Groups are in ascending key order; rows with a missing key are dropped and
/// missing cost or claim values count as nothing. A group whose total cost is zero
/// gets a NaN savings percentage.
///
/// # Arguments
/// * `data` - Source data
/// * `group_col` - Column to group by (e.g. `Province`, `PostalCode`)
/// * `cost_col` - Cost incurred (e.g. `TotalPremium`)
/// * `claim_col` - Claim losses (e.g. `TotalClaims`)
pub fn calculate_cost_savings(
    data: &Dataset,
    group_col: &str,
    cost_col: &str,
    claim_col: &str,
) -> StatsResult<SavingsSummary> {
    data.require_columns(&[group_col, cost_col, claim_col])?;
    let costs = data.numeric_values(cost_col)?;
    let claims = data.numeric_values(claim_col)?;

    let rows: Vec<SavingsRow> = data
        .group_indices(group_col)?
        .into_iter()
        .map(|(group, indices)| {
            let pick = |values: &[f64]| -> Vec<f64> {
                indices.iter().map(|&i| values[i]).collect()
            };
            SavingsRow::new(
                group,
                Reduction::Sum.apply(&pick(&costs)),
                Reduction::Sum.apply(&pick(&claims)),
            )
        })
        .collect();

    debug!(group_col, groups = rows.len(), "calculated cost savings");
    Ok(SavingsSummary {
        group_column: group_col.to_owned(),
        rows,
    })
}

/// Groups whose savings percentage exceeds `threshold`, best first
///
/// The sort is stable, so groups with equal percentages keep their order from
/// `savings_summary`. Groups with a NaN percentage never pass the filter.
pub fn rank_savings_opportunities(
    savings_summary: &SavingsSummary,
    threshold: f64,
) -> SavingsSummary {
    let mut rows: Vec<SavingsRow> = savings_summary
        .rows
        .iter()
        .filter(|r| r.savings_percentage > threshold)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.savings_percentage.total_cmp(&a.savings_percentage));

    debug!(
        threshold,
        kept = rows.len(),
        total = savings_summary.len(),
        "ranked savings opportunities"
    );
    SavingsSummary {
        group_column: savings_summary.group_column.clone(),
        rows,
    }
}
