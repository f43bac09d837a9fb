//! Z-score anomaly detection.

use analysis_api::AnomalyConfig;
use analysis_spi::{AnomalyDetector, AnomalyPoint, MetricKind, MetricSample, Severity};

use crate::stats::{mean, population_std_dev};

/// Flags samples that deviate from the mean by more than `threshold` standard
/// deviations. Deviations above `high_threshold` are high severity.
#[derive(Debug, Clone, Copy)]
pub struct ZScoreAnomalyDetector {
    threshold: f64,
    high_threshold: f64,
}

impl ZScoreAnomalyDetector {
    pub fn new(threshold: f64, high_threshold: f64) -> Self {
        Self {
            threshold,
            high_threshold,
        }
    }

    pub fn from_config(config: AnomalyConfig) -> Self {
        Self::new(config.threshold, config.high_threshold)
    }
}

impl Default for ZScoreAnomalyDetector {
    fn default() -> Self {
        Self::from_config(AnomalyConfig::default())
    }
}

impl AnomalyDetector for ZScoreAnomalyDetector {
    fn detect(&self, samples: &[MetricSample], metric: MetricKind) -> Vec<AnomalyPoint> {
        let values = metric.values(samples);
        let mean = mean(&values);
        let std_dev = population_std_dev(&values, mean);

        samples
            .iter()
            .zip(values.iter())
            .filter_map(|(sample, &value)| {
                let deviation = (value - mean).abs();
                if deviation <= self.threshold * std_dev {
                    return None;
                }
                let severity = if deviation > self.high_threshold * std_dev {
                    Severity::High
                } else {
                    Severity::Medium
                };
                Some(AnomalyPoint::new(sample.date, value, severity))
            })
            .collect()
    }
}

/// Population z-score of every value; all zeros when the values are constant.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    let mean = mean(values);
    let std_dev = population_std_dev(values, mean);
    if std_dev == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&x| (x - mean) / std_dev).collect()
}
