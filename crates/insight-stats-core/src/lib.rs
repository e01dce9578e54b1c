//! insight-stats-core: statistical tests and cost-savings aggregation
//!
//! This crate provides hypothesis-test runners and grouping utilities over a small
//! in-memory tabular [`Dataset`]. Tail probabilities are delegated to `statrs`.

pub mod data;
pub mod errors;
pub mod savings;
pub mod shaping;
pub mod tests;
pub mod types;

pub use data::{Column, ContingencyTable, Dataset, Row};
pub use errors::{StatsError, StatsResult};
pub use savings::{calculate_cost_savings, rank_savings_opportunities, SavingsRow, SavingsSummary};
pub use shaping::{aggregate_by_group, compute_metric, generate_contingency_table, segment_data};
pub use tests::{
    perform_anova_by_group, perform_anova_test, perform_chi2_test, perform_mannwhitneyu_test,
    perform_t_test, TestResult,
};
pub use types::*;
