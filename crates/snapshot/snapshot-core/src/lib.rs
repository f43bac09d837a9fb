//! Snapshot Core
//!
//! Turns a raw fire/event feed into dashboard metrics and alerts, caches the
//! result per query with a TTL, and falls back to static figures when the
//! source fails.

pub mod cache;
pub mod processing;
pub mod service;
pub mod synthetic;

pub use snapshot_spi::*;

pub use cache::{CacheEntry, TtlCache};
pub use processing::{
    build_snapshot, carbon_from_fires, deforestation_rate, fallback_snapshot, generate_alerts,
    ozone_impact, temperature_anomaly, water_quality,
};
pub use service::{SnapshotService, DEFAULT_SNAPSHOT_TTL};
pub use synthetic::SyntheticFeedSource;
