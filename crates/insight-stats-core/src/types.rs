use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::{StatsError, StatsResult};

/// Significance level used when the caller does not pick one
pub const DEFAULT_ALPHA: f64 = 0.05;

/// A single cell of a [`Dataset`](crate::Dataset)
///
/// Values have a total order (missing < boolean < numeric < text) so they can key
/// ordered groupings. Numbers compare numerically; NaN falls back to
/// `f64::total_cmp`.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value. Booleans count as 0/1, missing is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::Text(_) => 3,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Number(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Number(f64::from(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Logical type of a column, inferred from its non-missing values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Categorical,
    /// Every value is missing
    Empty,
}

/// Alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    #[default]
    TwoSided,
    Less,
    Greater,
}

/// Reduction applied by [`compute_metric`](crate::compute_metric)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Mean,
    Median,
    Min,
    Max,
    Count,
}

impl FromStr for Reduction {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            "median" => Ok(Reduction::Median),
            "min" => Ok(Reduction::Min),
            "max" => Ok(Reduction::Max),
            "count" => Ok(Reduction::Count),
            _ => Err(StatsError::UnknownOperation(s.to_owned())),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reduction::Sum => "sum",
            Reduction::Mean => "mean",
            Reduction::Median => "median",
            Reduction::Min => "min",
            Reduction::Max => "max",
            Reduction::Count => "count",
        };
        f.write_str(name)
    }
}

/// Options for the Welch t-test
#[derive(Debug, Clone)]
pub struct TTestOptions {
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Significance level (default: 0.05)
    pub alpha: f64,
}

impl Default for TTestOptions {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Options for the chi-square independence test
#[derive(Debug, Clone)]
pub struct ChiSquareOptions {
    /// Apply Yates' continuity correction (only affects 1 degree of freedom)
    pub correction: bool,
    /// Significance level (default: 0.05)
    pub alpha: f64,
}

impl Default for ChiSquareOptions {
    fn default() -> Self {
        Self {
            correction: true,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Options for one-way ANOVA
#[derive(Debug, Clone)]
pub struct AnovaOptions {
    /// Significance level (default: 0.05)
    pub alpha: f64,
}

impl Default for AnovaOptions {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// How the Mann-Whitney U p-value is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MannWhitneyMethod {
    /// Exact when either sample has at most 8 observations and nothing is tied,
    /// asymptotic otherwise
    #[default]
    Auto,
    /// Exact null distribution of U
    Exact,
    /// Normal approximation with tie-corrected variance
    Asymptotic,
}

/// Options for the Mann-Whitney U test
#[derive(Debug, Clone)]
pub struct MannWhitneyOptions {
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Exact or asymptotic p-value (default: Auto)
    pub method: MannWhitneyMethod,
    /// Apply continuity correction to the normal approximation
    pub continuity_correction: bool,
    /// Significance level (default: 0.05)
    pub alpha: f64,
}

impl Default for MannWhitneyOptions {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            method: MannWhitneyMethod::Auto,
            continuity_correction: true,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Options for [`segment_data`](crate::segment_data)
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Reject value sets that share a member, so no row lands in both groups
    pub require_disjoint: bool,
}

pub(crate) fn validate_alpha(alpha: f64) -> StatsResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidAlpha(alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ordering() {
        let mut values = vec![
            Value::from("B"),
            Value::from(2.0),
            Value::Null,
            Value::from("A"),
            Value::from(-1),
            Value::from(true),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::from(true),
                Value::from(-1),
                Value::from(2.0),
                Value::from("A"),
                Value::from("B"),
            ]
        );
    }

    #[test]
    fn test_value_numeric_equality() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(1.0), Value::from("1"));
    }

    #[test]
    fn test_reduction_parse() {
        assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
        assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
        assert_eq!(
            "mode".parse::<Reduction>(),
            Err(StatsError::UnknownOperation("mode".into()))
        );
    }

    #[test]
    fn test_validate_alpha() {
        assert!(validate_alpha(0.05).is_ok());
        assert!(validate_alpha(0.0).is_err());
        assert!(validate_alpha(1.0).is_err());
        assert!(validate_alpha(f64::NAN).is_err());
    }
}
