//! Raw fire-detection and natural-event feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};

/// Event categories that count as active disasters.
pub const DISASTER_CATEGORIES: [&str; 4] = ["wildfires", "floods", "storms", "volcanoes"];

/// Fire confidence above which a detection counts as high confidence.
pub const HIGH_CONFIDENCE_FIRE: f64 = 80.0;

/// A single active-fire detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireDetection {
    pub latitude: f64,
    pub longitude: f64,
    /// Detection confidence, 0–100.
    pub confidence: f64,
    /// Fire radiative power in MW.
    pub frp: f64,
}

/// A natural event (flood, storm, ...) with its category ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalEvent {
    pub id: String,
    pub title: String,
    pub categories: Vec<String>,
}

impl EnvironmentalEvent {
    pub fn has_category(&self, ids: &[&str]) -> bool {
        self.categories.iter().any(|c| ids.contains(&c.as_str()))
    }
}

/// Counts derived from a feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStatistics {
    pub high_confidence_fires: usize,
    pub active_disasters: usize,
}

impl FeedStatistics {
    pub fn compute(fires: &[FireDetection], events: &[EnvironmentalEvent]) -> Self {
        Self {
            high_confidence_fires: fires
                .iter()
                .filter(|f| f.confidence > HIGH_CONFIDENCE_FIRE)
                .count(),
            active_disasters: events
                .iter()
                .filter(|e| e.has_category(&DISASTER_CATEGORIES))
                .count(),
        }
    }
}

/// Everything a source returns for one fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFeed {
    /// Source id to human-readable provider name.
    pub sources: BTreeMap<String, String>,
    pub active_fires: Vec<FireDetection>,
    pub environmental_events: Vec<EnvironmentalEvent>,
    /// Whether land-surface temperature data was available.
    pub temperature_available: bool,
}

impl FireDetection {
    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SnapshotError::InvalidData(format!(
                "fire at ({}, {}) is outside valid coordinates",
                self.latitude, self.longitude
            )));
        }
        if !(0.0..=100.0).contains(&self.confidence) {
            return Err(SnapshotError::InvalidData(format!(
                "fire confidence {} is outside 0-100",
                self.confidence
            )));
        }
        if !self.frp.is_finite() || self.frp < 0.0 {
            return Err(SnapshotError::InvalidData(format!(
                "fire radiative power {} is not a non-negative number",
                self.frp
            )));
        }
        Ok(())
    }
}

impl EnvironmentalFeed {
    pub fn statistics(&self) -> FeedStatistics {
        FeedStatistics::compute(&self.active_fires, &self.environmental_events)
    }

    /// Reject feeds whose detections would produce meaningless metrics.
    pub fn validate(&self) -> Result<()> {
        self.active_fires.iter().try_for_each(FireDetection::validate)?;
        if let Some(event) = self.environmental_events.iter().find(|e| e.id.is_empty()) {
            return Err(SnapshotError::InvalidData(format!(
                "event '{}' has no id",
                event.title
            )));
        }
        Ok(())
    }
}
