//! Combined analysis report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{AnomalyPoint, MetricKind, MetricSample, SeasonalResult, TrendResult};

/// Qualitative strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

/// Overall stability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Volatile,
}

/// Qualitative reading of the trend, seasonal and anomaly results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub trend_strength: Strength,
    pub seasonal_strength: Strength,
    pub anomaly_count: usize,
    pub overall_stability: Stability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub trend: TrendResult,
    pub seasonal: SeasonalResult,
    pub anomalies: Vec<AnomalyPoint>,
    pub summary: AnalysisSummary,
}

/// Request echo and bookkeeping attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub country_code: String,
    pub time_range: u32,
    pub prediction_horizon: u32,
    pub metric: MetricKind,
    pub generated_at: DateTime<Utc>,
    pub data_points: usize,
}

/// Full response of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesReport {
    /// Historical samples followed by forecast samples.
    pub time_series: Vec<MetricSample>,
    pub analysis: AnalysisSection,
    pub metadata: ReportMetadata,
}
