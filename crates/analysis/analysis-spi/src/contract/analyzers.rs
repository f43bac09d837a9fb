//! Analyzer trait definitions.

use crate::model::{AnomalyPoint, MetricKind, MetricSample, SeasonalResult, TrendResult};

/// Fits a linear trend to a chronologically ordered series.
pub trait TrendEstimator: Send + Sync {
    fn estimate(&self, values: &[f64]) -> TrendResult;
}

/// Summarises the monthly pattern of one metric.
pub trait SeasonalAnalyzer: Send + Sync {
    fn analyze(&self, samples: &[MetricSample], metric: MetricKind) -> SeasonalResult;
}

/// Flags samples whose metric value is an outlier.
///
/// Returns only the flagged samples, in their original order.
pub trait AnomalyDetector: Send + Sync {
    fn detect(&self, samples: &[MetricSample], metric: MetricKind) -> Vec<AnomalyPoint>;
}
