//! Dashboard snapshot built from a feed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Increasing,
    Stable,
    Variable,
}

/// One headline metric with its unit and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetric {
    pub value: f64,
    pub unit: String,
    pub trend: MetricTrend,
    pub source: String,
}

impl SnapshotMetric {
    pub fn new(value: f64, unit: &str, trend: MetricTrend, source: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            trend,
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetrics {
    pub deforestation: SnapshotMetric,
    pub carbon_levels: SnapshotMetric,
    pub water_quality: SnapshotMetric,
    pub temperature: SnapshotMetric,
    pub ozone_levels: SnapshotMetric,
    pub sea_level: SnapshotMetric,
}

/// Feed sizes behind a live snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataSummary {
    pub active_fires: usize,
    pub environmental_events: usize,
    pub high_confidence_fires: usize,
    pub active_disasters: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_update: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data_sources: BTreeMap<String, String>,
    pub metrics: SnapshotMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawDataSummary>,
    pub alerts: Vec<String>,
    pub status: SnapshotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Snapshot as returned to callers, annotated when served from cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub snapshot: EnvironmentalSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    /// Seconds since the cached snapshot was fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
}

impl SnapshotResponse {
    pub fn fresh(snapshot: EnvironmentalSnapshot) -> Self {
        Self {
            snapshot,
            cached: None,
            cache_age: None,
        }
    }

    pub fn from_cache(snapshot: EnvironmentalSnapshot, age_secs: u64) -> Self {
        Self {
            snapshot,
            cached: Some(true),
            cache_age: Some(age_secs),
        }
    }

    pub fn is_cached(&self) -> bool {
        self.cached.unwrap_or(false)
    }
}
