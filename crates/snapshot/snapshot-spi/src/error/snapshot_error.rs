//! Snapshot error types.

use thiserror::Error;

/// Errors raised by snapshot sources.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("Source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Invalid feed data: {0}")]
    InvalidData(String),
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let error = SnapshotError::SourceUnavailable {
            source_name: "firms".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Source 'firms' unavailable: connection refused"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = SnapshotError::InvalidData("negative fire count".to_string());
        assert_eq!(error.to_string(), "Invalid feed data: negative fire count");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnapshotError>();
    }
}
