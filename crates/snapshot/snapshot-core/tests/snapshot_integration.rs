//! Integration tests for the cached snapshot service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use snapshot_core::{
    EnvironmentalFeed, FireDetection, Result, SnapshotError, SnapshotQuery, SnapshotService,
    SnapshotSource, SnapshotStatus, SyntheticFeedSource,
};

/// Mock source: returns a feed whose fire count grows with every fetch.
struct CountingSource {
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SnapshotSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn fetch(&self, _query: &SnapshotQuery) -> Result<EnvironmentalFeed> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(EnvironmentalFeed {
            active_fires: (0..n)
                .map(|_| FireDetection {
                    latitude: 0.0,
                    longitude: 0.0,
                    confidence: 90.0,
                    frp: 1.0,
                })
                .collect(),
            ..EnvironmentalFeed::default()
        })
    }
}

/// Mock source: always fails
struct FailingSource;

impl SnapshotSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch(&self, _query: &SnapshotQuery) -> Result<EnvironmentalFeed> {
        Err(SnapshotError::SourceUnavailable {
            source_name: "failing".to_string(),
            reason: "timeout".to_string(),
        })
    }
}

/// Mock source: returns a detection with impossible confidence
struct CorruptSource;

impl SnapshotSource for CorruptSource {
    fn name(&self) -> &str {
        "corrupt"
    }

    fn fetch(&self, _query: &SnapshotQuery) -> Result<EnvironmentalFeed> {
        Ok(EnvironmentalFeed {
            active_fires: vec![FireDetection {
                latitude: 10.0,
                longitude: 20.0,
                confidence: 250.0,
                frp: 5.0,
            }],
            ..EnvironmentalFeed::default()
        })
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
}

fn after(secs: i64) -> DateTime<Utc> {
    t0() + chrono::Duration::seconds(secs)
}

fn service_with(source: Arc<CountingSource>) -> SnapshotService {
    SnapshotService::new(source, Duration::from_secs(300))
}

fn fire_count(service: &SnapshotService, query: &SnapshotQuery, now: DateTime<Utc>) -> usize {
    service
        .snapshot_at(query, now)
        .snapshot
        .raw_data
        .map(|raw| raw.active_fires)
        .unwrap_or_default()
}

#[test]
fn test_second_call_within_ttl_is_cached() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    let query = SnapshotQuery::default();

    let first = service.snapshot_at(&query, t0());
    assert!(!first.is_cached());
    assert_eq!(first.snapshot.status, SnapshotStatus::Live);

    let second = service.snapshot_at(&query, after(120));
    assert!(second.is_cached());
    assert_eq!(second.cache_age, Some(120));
    assert_eq!(second.snapshot, first.snapshot);
    assert_eq!(source.fetches(), 1);
}

#[test]
fn test_expired_entry_is_refetched() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    let query = SnapshotQuery::default();

    assert_eq!(fire_count(&service, &query, t0()), 1);
    let response = service.snapshot_at(&query, after(300));
    assert!(!response.is_cached());
    assert_eq!(response.snapshot.raw_data.map(|r| r.active_fires), Some(2));
    assert_eq!(source.fetches(), 2);
}

#[test]
fn test_force_bypasses_and_refreshes_cache() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    let query = SnapshotQuery::default();
    let forced = SnapshotQuery {
        force: true,
        ..SnapshotQuery::default()
    };

    assert_eq!(fire_count(&service, &query, t0()), 1);
    let response = service.snapshot_at(&forced, after(10));
    assert!(!response.is_cached());
    assert_eq!(source.fetches(), 2);

    // The forced fetch replaced the entry for the same key.
    let cached = service.snapshot_at(&query, after(20));
    assert!(cached.is_cached());
    assert_eq!(cached.cache_age, Some(10));
    assert_eq!(cached.snapshot.raw_data.map(|r| r.active_fires), Some(2));
}

#[test]
fn test_queries_are_cached_independently() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    let global = SnapshotQuery::default();
    let asia = SnapshotQuery {
        region: "asia".to_string(),
        ..SnapshotQuery::default()
    };

    assert_eq!(fire_count(&service, &global, t0()), 1);
    assert_eq!(fire_count(&service, &asia, t0()), 2);
    assert_eq!(fire_count(&service, &global, after(1)), 1);
    assert_eq!(service.cache().len(), 2);
    assert_eq!(source.fetches(), 2);
}

#[test]
fn test_expired_keys_are_dropped_on_refresh() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    for i in 0..1000 {
        let query = SnapshotQuery {
            region: format!("region-{i}"),
            ..SnapshotQuery::default()
        };
        service.snapshot_at(&query, t0());
    }
    assert_eq!(service.cache().len(), 1000);

    service.snapshot_at(&SnapshotQuery::default(), after(86_400));
    assert_eq!(service.cache().len(), 1);
}

#[test]
fn test_fresh_keys_survive_purge() {
    let source = Arc::new(CountingSource::new());
    let service = service_with(source.clone());
    let old = SnapshotQuery {
        region: "old".to_string(),
        ..SnapshotQuery::default()
    };
    let recent = SnapshotQuery {
        region: "recent".to_string(),
        ..SnapshotQuery::default()
    };
    service.snapshot_at(&old, t0());
    service.snapshot_at(&recent, after(200));
    service.snapshot_at(&SnapshotQuery::default(), after(350));

    assert_eq!(service.cache().len(), 2);
    assert!(service.snapshot_at(&recent, after(360)).is_cached());
}

#[test]
fn test_failing_source_serves_uncached_fallback() {
    let service = SnapshotService::new(Arc::new(FailingSource), Duration::from_secs(300));
    let query = SnapshotQuery::default();

    let response = service.snapshot_at(&query, t0());
    assert_eq!(response.snapshot.status, SnapshotStatus::Fallback);
    assert!(!response.is_cached());
    assert!(service.cache().is_empty());

    let again = service.snapshot_at(&query, after(1));
    assert!(!again.is_cached());
}

#[test]
fn test_invalid_feed_serves_uncached_fallback() {
    let service = SnapshotService::new(Arc::new(CorruptSource), Duration::from_secs(300));
    let response = service.snapshot_at(&SnapshotQuery::default(), t0());
    assert_eq!(response.snapshot.status, SnapshotStatus::Fallback);
    assert!(service.cache().is_empty());
}

#[test]
fn test_synthetic_source_end_to_end() {
    let service = SnapshotService::new(
        Arc::new(SyntheticFeedSource::seeded(2025)),
        Duration::from_secs(300),
    );
    assert_eq!(service.source_name(), "synthetic");

    let response = service.snapshot_at(&SnapshotQuery::default(), t0());
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "live");
    assert_eq!(json["data_sources"].as_object().map(|m| m.len()), Some(4));
    assert!(json["metrics"]["carbon_levels"]["value"].as_f64().unwrap() >= 415.0);
    assert!(json.get("cached").is_none());

    let cached = serde_json::to_value(service.snapshot_at(&SnapshotQuery::default(), after(5))).unwrap();
    assert_eq!(cached["cached"], true);
    assert_eq!(cached["cache_age"], 5);
}
