//! Shared application state.

use std::sync::Arc;

use analysis_facade::{AnalysisConfig, TimeSeriesAnalyzer};
use snapshot_core::{SnapshotService, SyntheticFeedSource};

use crate::config::ServerConfig;

/// State shared across handlers. Cloning shares the same analyzer and cache.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TimeSeriesAnalyzer>,
    pub snapshots: Arc<SnapshotService>,
}

impl AppState {
    /// Default analyzer with the configured limits and a synthetic snapshot source.
    pub fn new(config: &ServerConfig) -> Self {
        let analyzer = TimeSeriesAnalyzer::new(AnalysisConfig::default().with_limits(config.limits));
        let snapshots = SnapshotService::new(
            Arc::new(SyntheticFeedSource::default()),
            config.snapshot_ttl,
        );
        Self::from_parts(analyzer, snapshots)
    }

    pub fn from_parts(analyzer: TimeSeriesAnalyzer, snapshots: SnapshotService) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            snapshots: Arc::new(snapshots),
        }
    }
}
