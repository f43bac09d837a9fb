//! Trend, seasonal and anomaly result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a fitted linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

/// Linear trend estimate for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Regression slope per sample.
    pub rate: f64,
    /// Coefficient of determination, clamped to `[0, 1]`.
    pub confidence: f64,
    /// Population standard deviation of the values.
    pub volatility: f64,
}

impl TrendResult {
    /// Result reported when fewer than two points are available.
    pub fn insufficient_data() -> Self {
        Self {
            direction: TrendDirection::InsufficientData,
            rate: 0.0,
            confidence: 0.0,
            volatility: 0.0,
        }
    }
}

/// Monthly seasonality summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalResult {
    /// Spread between the highest and lowest monthly deviation.
    pub amplitude: f64,
    /// Calendar month (0 = January) with the highest deviation.
    pub peak_month: u32,
    /// Amplitude normalised by twice the population standard deviation.
    pub strength: f64,
}

/// Severity tier of a flagged sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// A sample flagged as anomalous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub is_anomaly: bool,
    pub severity: Severity,
}

impl AnomalyPoint {
    pub fn new(date: NaiveDate, value: f64, severity: Severity) -> Self {
        Self {
            date,
            value,
            is_anomaly: true,
            severity,
        }
    }
}
