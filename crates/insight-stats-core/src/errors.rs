use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid significance level: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Column {column} must be {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Degenerate contingency table: {rows}x{cols} (need at least 2x2)")]
    DegenerateTable { rows: usize, cols: usize },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Segments overlap on column {column}")]
    OverlappingSegments { column: String },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatchMsg(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Numerical errors
    #[error("statrs error: {0}")]
    Distribution(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
