//! Data models for environmental snapshots.

mod feed;
mod query;
mod snapshot;

pub use feed::{EnvironmentalEvent, EnvironmentalFeed, FeedStatistics, FireDetection};
pub use query::SnapshotQuery;
pub use snapshot::{
    EnvironmentalSnapshot, MetricTrend, RawDataSummary, SnapshotMetric, SnapshotMetrics,
    SnapshotResponse, SnapshotStatus,
};
