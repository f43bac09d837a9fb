//! Snapshot query parameters.

use serde::{Deserialize, Serialize};

/// Parameters identifying a snapshot. Everything except `force` is part of
/// the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotQuery {
    pub region: String,
    pub time_range: String,
    pub country: String,
    pub layer: String,
    /// Skip the cache and fetch fresh data.
    #[serde(default)]
    pub force: bool,
}

impl Default for SnapshotQuery {
    fn default() -> Self {
        Self {
            region: "global".to_string(),
            time_range: "24h".to_string(),
            country: String::new(),
            layer: "all".to_string(),
            force: false,
        }
    }
}

impl SnapshotQuery {
    /// `region|timeRange|country|layer`
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.region, self.time_range, self.country, self.layer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_key() {
        assert_eq!(SnapshotQuery::default().cache_key(), "global|24h||all");
    }

    #[test]
    fn test_force_is_not_part_of_key() {
        let forced = SnapshotQuery {
            force: true,
            ..SnapshotQuery::default()
        };
        assert_eq!(forced.cache_key(), SnapshotQuery::default().cache_key());
    }

    #[test]
    fn test_key_includes_every_dimension() {
        let query = SnapshotQuery {
            region: "asia".to_string(),
            time_range: "7d".to_string(),
            country: "BD".to_string(),
            layer: "fires".to_string(),
            force: false,
        };
        assert_eq!(query.cache_key(), "asia|7d|BD|fires");
    }
}
