//! Linear trend estimation
//!
//! Fits y = intercept + slope * t by ordinary least squares, where t is the
//! sample index, and classifies the slope.

use analysis_api::TrendConfig;
use analysis_spi::{TrendDirection, TrendEstimator, TrendResult};

/// OLS trend estimator.
#[derive(Debug, Clone, Copy)]
pub struct LinearTrendEstimator {
    stable_slope: f64,
}

impl LinearTrendEstimator {
    /// Create an estimator that reports |slope| <= `stable_slope` as stable.
    pub fn new(stable_slope: f64) -> Self {
        Self { stable_slope }
    }

    pub fn from_config(config: TrendConfig) -> Self {
        Self::new(config.stable_slope)
    }

    fn classify(&self, slope: f64) -> TrendDirection {
        if slope.abs() <= self.stable_slope {
            TrendDirection::Stable
        } else if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

impl Default for LinearTrendEstimator {
    fn default() -> Self {
        Self::from_config(TrendConfig::default())
    }
}

impl TrendEstimator for LinearTrendEstimator {
    fn estimate(&self, values: &[f64]) -> TrendResult {
        if values.len() < 2 {
            return TrendResult::insufficient_data();
        }

        let n = values.len() as f64;
        let sum_t: f64 = (0..values.len()).map(|i| i as f64).sum();
        let sum_y: f64 = values.iter().sum();
        let sum_t2: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        // Never zero for n >= 2 distinct indices.
        let denominator = n * sum_t2 - sum_t * sum_t;
        let slope = (n * sum_ty - sum_t * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_t) / n;

        let mean_y = sum_y / n;
        let ss_tot: f64 = values.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = values
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
            .sum();

        // Only identical values are degenerate; tiny spreads keep their statistics.
        let constant = values.iter().all(|&y| y == values[0]);
        let r_squared = 1.0 - ss_res / ss_tot;
        let (confidence, volatility) = if constant || !r_squared.is_finite() {
            (1.0, 0.0)
        } else {
            (r_squared.clamp(0.0, 1.0), (ss_tot / n).sqrt())
        };

        TrendResult {
            direction: self.classify(slope),
            rate: slope,
            confidence,
            volatility,
        }
    }
}
