//! Versioned snapshot of the whole dashboard state.

use log::{error, warn};
use serde::Serialize;
use std::sync::Arc;

use super::KeyValueStore;
use crate::constants::{STORAGE_DATA_KEY, STORAGE_VERSION, STORAGE_VERSION_KEY};
use crate::errors::Result;
use crate::store::FinancialData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    /// Size of the stored snapshot in bytes
    pub used_bytes: u64,
    pub available: bool,
}

/// Reads and writes [`FinancialData`] through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SnapshotRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SnapshotRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, data: &FinancialData) -> Result<()> {
        let json = serde_json::to_string(data)?;
        self.store.set(STORAGE_DATA_KEY, &json)?;
        self.store.set(STORAGE_VERSION_KEY, STORAGE_VERSION)?;
        Ok(())
    }

    /// Returns the stored snapshot, or `None` when nothing usable is stored.
    ///
    /// A snapshot written under another version tag is discarded. Corrupt
    /// JSON is logged and ignored.
    pub fn load(&self) -> Option<FinancialData> {
        let stored = match self.store.get(STORAGE_DATA_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                error!("Error loading stored data: {}", e);
                return None;
            }
        };

        let version = self.store.get(STORAGE_VERSION_KEY).ok().flatten();
        if version.as_deref() != Some(STORAGE_VERSION) {
            warn!(
                "Stored data version {:?} does not match {}, discarding",
                version, STORAGE_VERSION
            );
            if let Err(e) = self.clear() {
                error!("Error clearing stored data: {}", e);
            }
            return None;
        }

        match serde_json::from_str::<FinancialData>(&stored) {
            Ok(data) => Some(data),
            Err(e) => {
                error!("Stored data is corrupt: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(STORAGE_DATA_KEY)?;
        self.store.remove(STORAGE_VERSION_KEY)?;
        Ok(())
    }

    pub fn storage_info(&self) -> StorageInfo {
        if !self.store.is_available() {
            return StorageInfo {
                used_bytes: 0,
                available: false,
            };
        }
        match self.store.get(STORAGE_DATA_KEY) {
            Ok(data) => StorageInfo {
                used_bytes: data.map(|d| d.len() as u64).unwrap_or(0),
                available: true,
            },
            Err(_) => StorageInfo {
                used_bytes: 0,
                available: false,
            },
        }
    }
}
