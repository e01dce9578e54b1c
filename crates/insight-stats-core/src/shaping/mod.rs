//! Data shaping utilities
//!
//! - Cross-tabulation against a numeric threshold
//! - Segmentation by set membership
//! - Group-by aggregation and filtered scalar metrics

mod aggregate;
mod crosstab;
mod segment;

pub use aggregate::{aggregate_by_group, compute_metric};
pub use crosstab::generate_contingency_table;
pub use segment::segment_data;
