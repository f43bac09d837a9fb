//! Feed-to-snapshot processing
//!
//! Derives the dashboard's headline metrics and alerts from fire detections
//! and natural events.

use std::time::Duration;

use chrono::{DateTime, Utc};
use snapshot_spi::{
    EnvironmentalEvent, EnvironmentalFeed, EnvironmentalSnapshot, FeedStatistics, FireDetection,
    MetricTrend, RawDataSummary, SnapshotMetric, SnapshotMetrics, SnapshotStatus,
};

/// Fires above this confidence are assumed to burn forest.
const FOREST_FIRE_CONFIDENCE: f64 = 70.0;
const BASELINE_CO2_PPM: f64 = 415.0;
const BASELINE_OZONE_DU: f64 = 300.0;
const BASELINE_WATER_QUALITY: f64 = 90.0;
const MIN_WATER_QUALITY: f64 = 70.0;
/// Latest available altimetry figure; no feed carries it.
const SEA_LEVEL_MM_PER_YEAR: f64 = 3.4;

const FALLBACK_ALERT: &str = "Environmental feed unavailable - showing fallback figures";
const FALLBACK_ERROR: &str = "Environmental feed temporarily unavailable";

/// Annual deforestation rate (% per year), one decimal.
pub fn deforestation_rate(fires: &[FireDetection]) -> f64 {
    let forest_fires = fires
        .iter()
        .filter(|f| f.confidence > FOREST_FIRE_CONFIDENCE)
        .count();
    let fire_impact = (forest_fires as f64 / 1000.0).min(0.5);
    ((1.0 + fire_impact) * 10.0).round() / 10.0
}

/// CO2 concentration in ppm, raised by total fire radiative power (capped at +15).
pub fn carbon_from_fires(fires: &[FireDetection]) -> f64 {
    let emissions: f64 = fires.iter().map(|f| f.frp).sum();
    (BASELINE_CO2_PPM + (emissions / 10_000.0).min(15.0)).round()
}

/// Share of clean water, lowered by flood and drought events (floor 70).
pub fn water_quality(events: &[EnvironmentalEvent]) -> f64 {
    let water_events = events
        .iter()
        .filter(|e| e.has_category(&["floods", "drought"]))
        .count();
    let impact = (water_events as f64 * 2.0).min(10.0);
    (BASELINE_WATER_QUALITY - impact).max(MIN_WATER_QUALITY)
}

/// Global temperature anomaly in °C.
pub fn temperature_anomaly(temperature_available: bool) -> f64 {
    if temperature_available {
        1.3
    } else {
        1.1
    }
}

/// Ozone column in DU, raised by fire count (capped at +20).
pub fn ozone_impact(fires: &[FireDetection]) -> f64 {
    (BASELINE_OZONE_DU + (fires.len() as f64 / 100.0).min(20.0)).round()
}

pub fn generate_alerts(feed: &EnvironmentalFeed, stats: &FeedStatistics) -> Vec<String> {
    let mut alerts = Vec::new();
    if stats.high_confidence_fires > 50 {
        alerts.push(format!(
            "High fire activity detected: {} high-confidence fires",
            stats.high_confidence_fires
        ));
    }
    if stats.active_disasters > 5 {
        alerts.push(format!(
            "Multiple active disasters: {} ongoing events",
            stats.active_disasters
        ));
    }
    if feed.active_fires.len() > 100 {
        alerts.push(format!(
            "Elevated fire risk: {} active fire detections",
            feed.active_fires.len()
        ));
    }
    alerts
}

/// Live snapshot of a feed fetched at `now`, next due after `ttl`.
pub fn build_snapshot(feed: &EnvironmentalFeed, now: DateTime<Utc>, ttl: Duration) -> EnvironmentalSnapshot {
    let stats = feed.statistics();
    let next = chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(now);

    EnvironmentalSnapshot {
        timestamp: now,
        last_updated: Some(display_time(now)),
        next_update: Some(display_time(next)),
        data_sources: feed.sources.clone(),
        metrics: SnapshotMetrics {
            deforestation: SnapshotMetric::new(
                deforestation_rate(&feed.active_fires),
                "% per year",
                MetricTrend::Increasing,
                "Fire detection density in forest regions",
            ),
            carbon_levels: SnapshotMetric::new(
                carbon_from_fires(&feed.active_fires),
                "ppm equivalent",
                MetricTrend::Increasing,
                "Estimated from active fire emissions",
            ),
            water_quality: SnapshotMetric::new(
                water_quality(&feed.environmental_events),
                "% clean",
                MetricTrend::Stable,
                "Flood and drought events",
            ),
            temperature: SnapshotMetric::new(
                temperature_anomaly(feed.temperature_available),
                "°C anomaly",
                MetricTrend::Increasing,
                "Land surface temperature",
            ),
            ozone_levels: SnapshotMetric::new(
                ozone_impact(&feed.active_fires),
                "DU impact",
                MetricTrend::Variable,
                "Estimated from fire and pollution events",
            ),
            sea_level: sea_level(),
        },
        raw_data: Some(RawDataSummary {
            active_fires: feed.active_fires.len(),
            environmental_events: feed.environmental_events.len(),
            high_confidence_fires: stats.high_confidence_fires,
            active_disasters: stats.active_disasters,
        }),
        alerts: generate_alerts(feed, &stats),
        status: SnapshotStatus::Live,
        error: None,
    }
}

/// Static snapshot served when the source cannot be reached.
pub fn fallback_snapshot(now: DateTime<Utc>) -> EnvironmentalSnapshot {
    let fallback = |value, unit, trend| SnapshotMetric::new(value, unit, trend, "Fallback data");
    EnvironmentalSnapshot {
        timestamp: now,
        last_updated: None,
        next_update: None,
        data_sources: Default::default(),
        metrics: SnapshotMetrics {
            deforestation: fallback(1.2, "% per year", MetricTrend::Stable),
            carbon_levels: fallback(421.0, "ppm", MetricTrend::Increasing),
            water_quality: fallback(87.0, "% clean", MetricTrend::Stable),
            temperature: fallback(1.1, "°C anomaly", MetricTrend::Increasing),
            ozone_levels: fallback(298.0, "DU", MetricTrend::Stable),
            sea_level: fallback(SEA_LEVEL_MM_PER_YEAR, "mm/year", MetricTrend::Increasing),
        },
        raw_data: None,
        alerts: vec![FALLBACK_ALERT.to_string()],
        status: SnapshotStatus::Fallback,
        error: Some(FALLBACK_ERROR.to_string()),
    }
}

fn sea_level() -> SnapshotMetric {
    SnapshotMetric::new(
        SEA_LEVEL_MM_PER_YEAR,
        "mm/year",
        MetricTrend::Increasing,
        "Satellite altimetry (latest available)",
    )
}

fn display_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
