//! Analysis Core
//!
//! Implementations of the series generator, trend estimator, seasonal
//! analyzer, anomaly detector and the orchestrator that combines them.

pub mod anomaly;
pub mod generator;
pub mod orchestrator;
pub mod random;
pub mod seasonal;
pub mod stats;
pub mod trend;

// Re-export SPI traits for implementations
pub use analysis_spi::{
    AnalysisError, AnomalyDetector, RandomSource, Result, SeasonalAnalyzer, TrendEstimator,
};

// Re-export main types
pub use anomaly::{z_scores, ZScoreAnomalyDetector};
pub use generator::{metric_profile, Bounds, MetricProfile, SeriesGenerator, TrendFactor};
pub use orchestrator::{summarize, TimeSeriesAnalyzer};
pub use random::{SeededRandom, SequenceRandom, ThreadRandom};
pub use seasonal::MonthlySeasonalAnalyzer;
pub use trend::LinearTrendEstimator;
