//! Dated metric observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One monthly observation of every environmental indicator.
///
/// Historical samples carry `prediction = false` and no confidence.
/// Forecast samples carry `prediction = true` and a confidence in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    /// First day of the observed month.
    pub date: NaiveDate,
    /// Surface temperature in °C.
    pub temperature: f64,
    /// Relative humidity, `[0, 100]`.
    pub humidity: f64,
    /// Air-quality index, `>= 0`.
    pub air_quality: f64,
    /// Deforestation percentage, `[0, 100]`.
    pub deforestation: f64,
    /// Carbon-emission index, `>= 0`.
    pub carbon_emission: f64,
    /// Water-quality index, `[0, 100]`.
    pub water_quality: f64,
    /// Biodiversity index, `[0, 100]`.
    pub biodiversity: f64,
    /// Composite safety score, `[0, 100]`.
    pub safety_score: f64,
    pub prediction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl MetricSample {
    /// Create an empty historical sample for the given month.
    pub fn historical(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Create an empty forecast sample for the given month.
    pub fn forecast(date: NaiveDate, confidence: f64) -> Self {
        Self {
            date,
            prediction: true,
            confidence: Some(confidence),
            ..Self::default()
        }
    }
}

/// Output of the series generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSeries {
    /// `window + 1` samples, oldest first, ending at the anchor month.
    pub historical: Vec<MetricSample>,
    /// `horizon` samples following the anchor month.
    pub predictions: Vec<MetricSample>,
}

impl GeneratedSeries {
    /// Total number of samples across both windows.
    pub fn len(&self) -> usize {
        self.historical.len() + self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Historical and forecast samples concatenated in chronological order.
    pub fn into_timeline(self) -> Vec<MetricSample> {
        let mut timeline = self.historical;
        timeline.extend(self.predictions);
        timeline
    }
}
