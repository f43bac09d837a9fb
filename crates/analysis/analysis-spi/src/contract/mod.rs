//! Contract definitions for time-series analysis.
//!
//! This module contains trait definitions that providers must implement.

mod analyzers;
mod random_source;

pub use analyzers::{AnomalyDetector, SeasonalAnalyzer, TrendEstimator};
pub use random_source::RandomSource;
