//! Metric selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::MetricSample;

/// One of the environmental indicators carried by a [`MetricSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Temperature,
    Humidity,
    AirQuality,
    Deforestation,
    CarbonEmission,
    WaterQuality,
    Biodiversity,
    SafetyScore,
}

impl MetricKind {
    /// Every metric, in wire order.
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Temperature,
        MetricKind::Humidity,
        MetricKind::AirQuality,
        MetricKind::Deforestation,
        MetricKind::CarbonEmission,
        MetricKind::WaterQuality,
        MetricKind::Biodiversity,
        MetricKind::SafetyScore,
    ];

    /// Wire name of the metric (camelCase field name on a sample).
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "temperature",
            MetricKind::Humidity => "humidity",
            MetricKind::AirQuality => "airQuality",
            MetricKind::Deforestation => "deforestation",
            MetricKind::CarbonEmission => "carbonEmission",
            MetricKind::WaterQuality => "waterQuality",
            MetricKind::Biodiversity => "biodiversity",
            MetricKind::SafetyScore => "safetyScore",
        }
    }

    /// Read this metric's value off a sample.
    pub fn value_of(&self, sample: &MetricSample) -> f64 {
        match self {
            MetricKind::Temperature => sample.temperature,
            MetricKind::Humidity => sample.humidity,
            MetricKind::AirQuality => sample.air_quality,
            MetricKind::Deforestation => sample.deforestation,
            MetricKind::CarbonEmission => sample.carbon_emission,
            MetricKind::WaterQuality => sample.water_quality,
            MetricKind::Biodiversity => sample.biodiversity,
            MetricKind::SafetyScore => sample.safety_score,
        }
    }

    /// Mutable access to this metric's slot on a sample.
    pub fn slot_mut<'a>(&self, sample: &'a mut MetricSample) -> &'a mut f64 {
        match self {
            MetricKind::Temperature => &mut sample.temperature,
            MetricKind::Humidity => &mut sample.humidity,
            MetricKind::AirQuality => &mut sample.air_quality,
            MetricKind::Deforestation => &mut sample.deforestation,
            MetricKind::CarbonEmission => &mut sample.carbon_emission,
            MetricKind::WaterQuality => &mut sample.water_quality,
            MetricKind::Biodiversity => &mut sample.biodiversity,
            MetricKind::SafetyScore => &mut sample.safety_score,
        }
    }

    /// Extract this metric from every sample, preserving order.
    pub fn values(&self, samples: &[MetricSample]) -> Vec<f64> {
        samples.iter().map(|s| self.value_of(s)).collect()
    }
}

impl Default for MetricKind {
    fn default() -> Self {
        MetricKind::Temperature
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = AnalysisError;

    /// Accepts the camelCase wire name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "temperature" => Ok(MetricKind::Temperature),
            "humidity" => Ok(MetricKind::Humidity),
            "airQuality" | "air_quality" => Ok(MetricKind::AirQuality),
            "deforestation" => Ok(MetricKind::Deforestation),
            "carbonEmission" | "carbon_emission" => Ok(MetricKind::CarbonEmission),
            "waterQuality" | "water_quality" => Ok(MetricKind::WaterQuality),
            "biodiversity" => Ok(MetricKind::Biodiversity),
            "safetyScore" | "safety_score" => Ok(MetricKind::SafetyScore),
            other => Err(AnalysisError::UnknownMetric(other.to_string())),
        }
    }
}
