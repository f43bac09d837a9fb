//! Analyzer configuration.

use serde::{Deserialize, Serialize};

// ============================================================================
// Generator
// ============================================================================

/// Upper bounds on the windows a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorLimits {
    /// Largest accepted historical window, in months (default: 120).
    pub max_time_range: u32,
    /// Largest accepted forecast horizon, in months (default: 60).
    pub max_horizon: u32,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_time_range: 120,
            max_horizon: 60,
        }
    }
}

impl GeneratorLimits {
    pub fn new(max_time_range: u32, max_horizon: u32) -> Self {
        Self {
            max_time_range,
            max_horizon,
        }
    }
}

// ============================================================================
// Analyzers
// ============================================================================

/// Trend estimator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Slopes with magnitude at or below this are reported as stable (default: 0.1).
    pub stable_slope: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { stable_slope: 0.1 }
    }
}

/// How the seasonal analyzer treats calendar months with no samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMonthPolicy {
    /// Empty months take no part in amplitude or peak selection.
    #[default]
    Exclude,
    /// Empty months average to 0 and still compete for min/max.
    ZeroAverage,
}

/// Seasonal analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeasonalConfig {
    pub empty_months: EmptyMonthPolicy,
}

impl SeasonalConfig {
    pub fn new(empty_months: EmptyMonthPolicy) -> Self {
        Self { empty_months }
    }
}

/// Z-score anomaly detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Deviation, in standard deviations, above which a sample is flagged (default: 2.5).
    pub threshold: f64,
    /// Deviation above which a flagged sample is high severity (default: 3.0).
    pub high_threshold: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            threshold: 2.5,
            high_threshold: 3.0,
        }
    }
}

impl AnomalyConfig {
    pub fn new(threshold: f64, high_threshold: f64) -> Self {
        Self {
            threshold,
            high_threshold,
        }
    }
}

/// Cut-offs for the qualitative summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryThresholds {
    /// |rate| above this is a strong trend (default: 0.5).
    pub strong_trend: f64,
    /// |rate| above this is a moderate trend (default: 0.1).
    pub moderate_trend: f64,
    /// Seasonal strength above this is strong (default: 0.3).
    pub strong_seasonal: f64,
    /// Seasonal strength above this is moderate (default: 0.1).
    pub moderate_seasonal: f64,
    /// A series is stable only with fewer anomalies than this (default: 3).
    pub max_stable_anomalies: usize,
    /// A series is stable only with |rate| below this (default: 0.3).
    pub max_stable_rate: f64,
}

impl Default for SummaryThresholds {
    fn default() -> Self {
        Self {
            strong_trend: 0.5,
            moderate_trend: 0.1,
            strong_seasonal: 0.3,
            moderate_seasonal: 0.1,
            max_stable_anomalies: 3,
            max_stable_rate: 0.3,
        }
    }
}

/// Everything the orchestrator needs besides the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub limits: GeneratorLimits,
    pub trend: TrendConfig,
    pub seasonal: SeasonalConfig,
    pub anomaly: AnomalyConfig,
    pub summary: SummaryThresholds,
}

impl AnalysisConfig {
    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_seasonal(mut self, seasonal: SeasonalConfig) -> Self {
        self.seasonal = seasonal;
        self
    }

    pub fn with_anomaly(mut self, anomaly: AnomalyConfig) -> Self {
        self.anomaly = anomaly;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.trend.stable_slope, 0.1);
        assert_eq!(config.anomaly.threshold, 2.5);
        assert_eq!(config.anomaly.high_threshold, 3.0);
        assert_eq!(config.summary.max_stable_anomalies, 3);
        assert_eq!(config.seasonal.empty_months, EmptyMonthPolicy::Exclude);
        assert_eq!(config.limits, GeneratorLimits::new(120, 60));
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = AnalysisConfig::default()
            .with_limits(GeneratorLimits::new(24, 12))
            .with_seasonal(SeasonalConfig::new(EmptyMonthPolicy::ZeroAverage))
            .with_anomaly(AnomalyConfig::new(2.0, 2.5));
        assert_eq!(config.limits.max_time_range, 24);
        assert_eq!(config.seasonal.empty_months, EmptyMonthPolicy::ZeroAverage);
        assert_eq!(config.anomaly.threshold, 2.0);
    }

    #[test]
    fn test_empty_month_policy_serde() {
        let json = serde_json::to_string(&EmptyMonthPolicy::ZeroAverage).unwrap();
        assert_eq!(json, "\"zero_average\"");
    }
}
