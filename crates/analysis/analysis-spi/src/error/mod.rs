//! Error types for time-series analysis.
//!
//! This module contains error types and the Result alias.

mod analysis_error;

pub use analysis_error::{AnalysisError, Result};
