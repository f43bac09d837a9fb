//! API error responses.

use analysis_facade::AnalysisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid query parameter")]
    InvalidQuery(String),

    #[error("Failed to generate time series analysis")]
    AnalysisFailed(String),

    #[error("Failed to build environmental snapshot")]
    SnapshotFailed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::AnalysisFailed(_) | ApiError::SnapshotFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn details(&self) -> &str {
        match self {
            ApiError::InvalidQuery(d) | ApiError::AnalysisFailed(d) | ApiError::SnapshotFailed(d) => d,
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidParameter { .. } | AnalysisError::UnknownMetric(_) => {
                ApiError::InvalidQuery(error.to_string())
            }
            other => ApiError::AnalysisFailed(other.to_string()),
        }
    }
}

/// `{ success: false, error, details }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, details = self.details(), "Request failed");
        }
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
            details: self.details().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
