//! Analysis error types.

use thiserror::Error;

/// Errors raised while generating or analysing a metric series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Numerical error: {0}")]
    NumericalError(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

impl AnalysisError {
    /// Shorthand for [`AnalysisError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
