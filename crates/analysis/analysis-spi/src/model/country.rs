//! Per-country trend multipliers.

use serde::{Deserialize, Serialize};

/// Multipliers applied to the synthetic trend of the country-sensitive metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFactors {
    pub temperature_trend: f64,
    pub air_quality_trend: f64,
    pub deforestation_trend: f64,
}

impl CountryFactors {
    pub const fn new(temperature_trend: f64, air_quality_trend: f64, deforestation_trend: f64) -> Self {
        Self {
            temperature_trend,
            air_quality_trend,
            deforestation_trend,
        }
    }

    /// Factors used for any country without an entry.
    pub const fn neutral() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Default for CountryFactors {
    fn default() -> Self {
        Self::neutral()
    }
}
