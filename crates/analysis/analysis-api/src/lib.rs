//! Analysis API
//!
//! Configuration types, the country factor table and request builders.

mod config;
mod country;
mod request;

pub use config::{
    AnalysisConfig, AnomalyConfig, EmptyMonthPolicy, GeneratorLimits, SeasonalConfig,
    SummaryThresholds, TrendConfig,
};
pub use country::{country_factors, known_countries};
pub use request::{AnalysisRequest, AnalysisRequestBuilder};

// Re-export SPI types
pub use analysis_spi::{
    AnalysisError, CountryFactors, MetricKind, Result, Severity, Stability, Strength,
    TrendDirection,
};
