//! Key-value persistence for dashboard snapshots.

mod key_value_store;
mod snapshot_repository;

pub use key_value_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use snapshot_repository::{SnapshotRepository, StorageInfo};
