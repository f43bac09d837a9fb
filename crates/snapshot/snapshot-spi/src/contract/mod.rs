//! Contract definitions for snapshot sources.

mod snapshot_source;

pub use snapshot_source::SnapshotSource;
