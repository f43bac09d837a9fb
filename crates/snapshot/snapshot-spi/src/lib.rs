//! Snapshot Service Provider Interface
//!
//! Defines the raw environmental feed, the dashboard snapshot built from it,
//! the source trait and error types.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SnapshotSource;
pub use error::{Result, SnapshotError};
pub use model::{
    EnvironmentalEvent, EnvironmentalFeed, EnvironmentalSnapshot, FeedStatistics, FireDetection,
    MetricTrend, RawDataSummary, SnapshotMetric, SnapshotMetrics, SnapshotQuery,
    SnapshotResponse, SnapshotStatus,
};
