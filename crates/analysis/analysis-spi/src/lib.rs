//! Analysis Service Provider Interface
//!
//! Defines the data model, traits and error types shared by the
//! environmental time-series toolkit.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyDetector, RandomSource, SeasonalAnalyzer, TrendEstimator};
pub use error::{AnalysisError, Result};
pub use model::{
    AnalysisSection, AnalysisSummary, AnomalyPoint, CountryFactors, GeneratedSeries, MetricKind,
    MetricSample, ReportMetadata, SeasonalResult, Severity, Stability, Strength,
    TimeSeriesReport, TrendDirection, TrendResult,
};
