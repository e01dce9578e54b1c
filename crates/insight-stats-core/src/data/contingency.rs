use crate::errors::{StatsError, StatsResult};
use crate::types::Value;

/// Cross-tabulated counts of two categorical dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    row_labels: Vec<Value>,
    col_labels: Vec<Value>,
    counts: Vec<Vec<usize>>,
}

impl ContingencyTable {
    /// Build a table from labels and a row-major count matrix
    pub fn new(
        row_labels: Vec<Value>,
        col_labels: Vec<Value>,
        counts: Vec<Vec<usize>>,
    ) -> StatsResult<Self> {
        if counts.len() != row_labels.len() {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "{} count rows for {} row labels",
                counts.len(),
                row_labels.len()
            )));
        }
        for (i, row) in counts.iter().enumerate() {
            if row.len() != col_labels.len() {
                return Err(StatsError::DimensionMismatchMsg(format!(
                    "Row {} has {} counts for {} column labels",
                    i,
                    row.len(),
                    col_labels.len()
                )));
            }
        }
        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    pub fn row_labels(&self) -> &[Value] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[Value] {
        &self.col_labels
    }

    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.col_labels.len())
    }

    /// Count for a label pair, 0 when either label is absent
    pub fn count(&self, row: &Value, col: &Value) -> usize {
        let r = self.row_labels.iter().position(|v| v == row);
        let c = self.col_labels.iter().position(|v| v == col);
        match (r, c) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// True when a dimension has collapsed below two levels
    pub fn is_degenerate(&self) -> bool {
        let (rows, cols) = self.shape();
        rows < 2 || cols < 2
    }
}
