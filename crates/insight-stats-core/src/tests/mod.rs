//! Statistical hypothesis testing
//!
//! Test statistics are assembled here; tail probabilities come from the `statrs`
//! distributions. Every runner reports the same [`TestResult`] record.


pub use categorical::{chi2_independence, perform_chi2_test};
pub use nonparametric::{mann_whitney_u, perform_mannwhitneyu_test};
pub use parametric::{perform_anova_by_group, perform_anova_test, perform_t_test, welch_t_test};

use statrs::distribution::ContinuousCDF;

use crate::types::Alternative;
use crate::StatsError;

/// Generic test result structure for all statistical tests
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Test statistic (t, U, chi2, F)
    pub statistic: f64,
    /// p-value, always within [0, 1]
    pub p_value: f64,
    /// `p_value < alpha`
    pub significant: bool,
    /// Significance level the flag was computed against
    pub alpha: f64,
    /// Degrees of freedom (numerator df for ANOVA, f64::NAN if not applicable)
    pub df: f64,
    /// Total sample size
    pub n: usize,
    /// Group 1 sample size (for two-sample tests)
    pub n1: usize,
    /// Group 2 sample size (for two-sample tests)
    pub n2: usize,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Test method/name
    pub method: String,
}

impl Default for TestResult {
    fn default() -> Self {
        Self {
            statistic: f64::NAN,
            p_value: f64::NAN,
            significant: false,
            alpha: crate::types::DEFAULT_ALPHA,
            df: f64::NAN,
            n: 0,
            n1: 0,
            n2: 0,
            alternative: Alternative::TwoSided,
            method: String::new(),
        }
    }
}

impl TestResult {
    /// Set the p-value (clamped to [0, 1]) and derive the significance flag
    fn with_p_value(mut self, p_value: f64, alpha: f64) -> Self {
        self.p_value = p_value.clamp(0.0, 1.0);
        self.alpha = alpha;
        self.significant = self.p_value < alpha;
        self
    }
}

/// Convert a statrs parameter error to our StatsError
fn convert_error<E: std::fmt::Display>(e: E) -> StatsError {
    StatsError::Distribution(e.to_string())
}

/// Filter NaN values from a slice
fn filter_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// p-value of `statistic` under `dist` for the given alternative
fn tail_p_value<D: ContinuousCDF<f64, f64>>(
    dist: &D,
    statistic: f64,
    alternative: Alternative,
) -> f64 {
    match alternative {
        Alternative::TwoSided => 2.0 * dist.sf(statistic.abs()),
        Alternative::Less => dist.cdf(statistic),
        Alternative::Greater => dist.sf(statistic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::Normal;

    #[test]
    fn test_with_p_value_flag() {
        let r = TestResult::default().with_p_value(0.049, 0.05);
        assert!(r.significant);
        let r = TestResult::default().with_p_value(0.05, 0.05);
        assert!(!r.significant);
        let r = TestResult::default().with_p_value(0.2, 0.25);
        assert!(r.significant);
    }

    #[test]
    fn test_with_p_value_clamped() {
        let r = TestResult::default().with_p_value(1.3, 0.05);
        assert_eq!(r.p_value, 1.0);
    }

    #[test]
    fn test_tail_p_value() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let two = tail_p_value(&normal, -1.96, Alternative::TwoSided);
        assert!((two - 0.05).abs() < 1e-3);
        let less = tail_p_value(&normal, -1.96, Alternative::Less);
        let greater = tail_p_value(&normal, -1.96, Alternative::Greater);
        assert!((less + greater - 1.0).abs() < 1e-12);
    }
}
