//! Snapshot source trait definition.

use crate::error::Result;
use crate::model::{EnvironmentalFeed, SnapshotQuery};

/// Provider of raw fire and event data for a snapshot.
///
/// Implementations may hit the network; callers fall back to static data
/// when `fetch` fails.
pub trait SnapshotSource: Send + Sync {
    /// Source name, used in logs and errors.
    fn name(&self) -> &str;

    /// Fetch the current feed for a query.
    fn fetch(&self, query: &SnapshotQuery) -> Result<EnvironmentalFeed>;
}
