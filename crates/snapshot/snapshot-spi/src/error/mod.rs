//! Error types for snapshot sources.

mod snapshot_error;

pub use snapshot_error::{Result, SnapshotError};
