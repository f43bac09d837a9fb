//! Keyed cache with a freshness window.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// A cached value and the time it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub fetched_at: DateTime<Utc>,
}

/// Thread-safe map from key to the last stored value, fresh for `ttl`.
///
/// Callers pass the current time so expiry is deterministic under test.
#[derive(Debug)]
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The value for `key` with its age in whole seconds, if younger than the TTL.
    pub fn get_fresh(&self, key: &str, now: DateTime<Utc>) -> Option<(V, u64)> {
        let entries = self.entries.lock();
        let entry = entries.get(key)?;
        let age_ms = (now - entry.fetched_at).num_milliseconds();
        if age_ms < self.ttl_millis() {
            Some((entry.value.clone(), (age_ms.max(0) / 1000) as u64))
        } else {
            None
        }
    }

    pub fn insert(&self, key: impl Into<String>, value: V, now: DateTime<Utc>) {
        self.entries.lock().insert(
            key.into(),
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn invalidate(&self, key: &str) -> Option<CacheEntry<V>> {
        self.entries.lock().remove(key)
    }

    /// Drop every stale entry, returning how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let ttl_ms = self.ttl_millis();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| (now - entry.fetched_at).num_milliseconds() < ttl_ms);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ttl_millis(&self) -> i64 {
        i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX)
    }
}
