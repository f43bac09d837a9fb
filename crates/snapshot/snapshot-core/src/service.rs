//! Cached snapshot service.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use snapshot_spi::{EnvironmentalSnapshot, SnapshotQuery, SnapshotResponse, SnapshotSource};

use crate::cache::TtlCache;
use crate::processing::{build_snapshot, fallback_snapshot};

/// Default freshness window for cached snapshots.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(300);

/// Serves snapshots from a source, caching each query for the TTL.
///
/// Source failures never surface as errors: the caller gets the static
/// fallback snapshot, which is not cached.
pub struct SnapshotService {
    source: Arc<dyn SnapshotSource>,
    cache: TtlCache<EnvironmentalSnapshot>,
}

impl SnapshotService {
    pub fn new(source: Arc<dyn SnapshotSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn cache(&self) -> &TtlCache<EnvironmentalSnapshot> {
        &self.cache
    }

    pub fn snapshot(&self, query: &SnapshotQuery) -> SnapshotResponse {
        self.snapshot_at(query, Utc::now())
    }

    /// Snapshot for `query` as of `now`.
    pub fn snapshot_at(&self, query: &SnapshotQuery, now: DateTime<Utc>) -> SnapshotResponse {
        let key = query.cache_key();

        if !query.force {
            if let Some((snapshot, age)) = self.cache.get_fresh(&key, now) {
                tracing::debug!(key = %key, age, "Serving cached snapshot");
                return SnapshotResponse::from_cache(snapshot, age);
            }
        }

        tracing::info!(key = %key, source = self.source.name(), "Fetching fresh environmental feed");
        match self.source.fetch(query).and_then(|feed| feed.validate().map(|()| feed)) {
            Ok(feed) => {
                let snapshot = build_snapshot(&feed, now, self.cache.ttl());
                // Keys come from the query string, so stale ones must not pile up.
                let purged = self.cache.purge_expired(now);
                if purged > 0 {
                    tracing::debug!(purged, "Dropped expired snapshots");
                }
                self.cache.insert(key, snapshot.clone(), now);
                SnapshotResponse::fresh(snapshot)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Snapshot source failed, serving fallback");
                SnapshotResponse::fresh(fallback_snapshot(now))
            }
        }
    }
}
