//! Analysis request and builder.

use analysis_spi::{AnalysisError, MetricKind, Result};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorLimits;

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Country code used to look up trend factors (default: "US").
    pub country_code: String,
    /// Historical window in months (default: 12).
    pub time_range: u32,
    /// Forecast horizon in months (default: 6).
    pub prediction_horizon: u32,
    /// Metric to analyse (default: temperature).
    pub metric: MetricKind,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            country_code: "US".to_string(),
            time_range: 12,
            prediction_horizon: 6,
            metric: MetricKind::Temperature,
        }
    }
}

impl AnalysisRequest {
    pub fn new(country_code: &str, time_range: u32, prediction_horizon: u32, metric: MetricKind) -> Self {
        Self {
            country_code: country_code.to_string(),
            time_range,
            prediction_horizon,
            metric,
        }
    }

    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::new()
    }

    /// Check the windows against `limits`.
    ///
    /// A zero-length historical window is rejected because trend progress
    /// is measured as a fraction of it.
    pub fn validate(&self, limits: &GeneratorLimits) -> Result<()> {
        if self.time_range == 0 {
            return Err(AnalysisError::invalid_parameter(
                "timeRange",
                "must be at least 1",
            ));
        }
        if self.time_range > limits.max_time_range {
            return Err(AnalysisError::invalid_parameter(
                "timeRange",
                format!("must not exceed {}", limits.max_time_range),
            ));
        }
        if self.prediction_horizon > limits.max_horizon {
            return Err(AnalysisError::invalid_parameter(
                "predictionHorizon",
                format!("must not exceed {}", limits.max_horizon),
            ));
        }
        Ok(())
    }
}

/// Builder for [`AnalysisRequest`]. Unset fields take the request defaults.
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    country_code: Option<String>,
    time_range: Option<u32>,
    prediction_horizon: Option<u32>,
    metric: Option<MetricKind>,
}

impl AnalysisRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, code: &str) -> Self {
        self.country_code = Some(code.to_string());
        self
    }

    pub fn time_range(mut self, months: u32) -> Self {
        self.time_range = Some(months);
        self
    }

    pub fn prediction_horizon(mut self, months: u32) -> Self {
        self.prediction_horizon = Some(months);
        self
    }

    pub fn metric(mut self, metric: MetricKind) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn build(self) -> AnalysisRequest {
        let defaults = AnalysisRequest::default();
        AnalysisRequest {
            country_code: self.country_code.unwrap_or(defaults.country_code),
            time_range: self.time_range.unwrap_or(defaults.time_range),
            prediction_horizon: self.prediction_horizon.unwrap_or(defaults.prediction_horizon),
            metric: self.metric.unwrap_or(defaults.metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = AnalysisRequest::default();
        assert_eq!(request.country_code, "US");
        assert_eq!(request.time_range, 12);
        assert_eq!(request.prediction_horizon, 6);
        assert_eq!(request.metric, MetricKind::Temperature);
    }

    #[test]
    fn test_builder_fills_defaults() {
        let request = AnalysisRequest::builder()
            .country("BD")
            .metric(MetricKind::Humidity)
            .build();
        assert_eq!(request.country_code, "BD");
        assert_eq!(request.time_range, 12);
        assert_eq!(request.metric, MetricKind::Humidity);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let request = AnalysisRequest::builder().time_range(0).build();
        let err = request.validate(&GeneratorLimits::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter { ref name, .. } if name == "timeRange"));
    }

    #[test]
    fn test_validate_limits() {
        let limits = GeneratorLimits::new(24, 6);
        assert!(AnalysisRequest::new("US", 24, 6, MetricKind::Temperature)
            .validate(&limits)
            .is_ok());
        assert!(AnalysisRequest::new("US", 25, 6, MetricKind::Temperature)
            .validate(&limits)
            .is_err());
        assert!(AnalysisRequest::new("US", 12, 7, MetricKind::Temperature)
            .validate(&limits)
            .is_err());
    }

    #[test]
    fn test_zero_horizon_is_allowed() {
        let request = AnalysisRequest::builder().prediction_horizon(0).build();
        assert!(request.validate(&GeneratorLimits::default()).is_ok());
    }
}
