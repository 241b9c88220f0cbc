//! Namespaced JSON persistence on top of a key-value store
//!
//! Storage problems never propagate out of this module: every operation
//! degrades to `false`, `None` or `0` and logs a warning, so callers keep
//! working in memory for the rest of the session.

use crate::infrastructure::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Storage key prefix used when the configuration does not name one
pub const DEFAULT_NAMESPACE: &str = "moodTracker";

const PROBE_KEY: &str = "__storage_test__";

/// The blobs the application persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Moods,
    Notes,
    Settings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Moods, StorageKey::Notes, StorageKey::Settings];

    fn suffix(&self) -> &'static str {
        match self {
            StorageKey::Moods => "moods",
            StorageKey::Notes => "notes",
            StorageKey::Settings => "settings",
        }
    }
}

/// Serializes values to JSON under namespaced keys
#[derive(Debug)]
pub struct StorageAdapter<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        StorageAdapter::with_namespace(store, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(store: S, namespace: impl Into<String>) -> Self {
        StorageAdapter {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full key under which `key` is stored
    pub fn namespaced(&self, key: StorageKey) -> String {
        format!("{}_{}", self.namespace, key.suffix())
    }

    /// Probe the store by writing and removing a sentinel key
    pub fn is_available(&self) -> bool {
        let probe = self
            .store
            .set_item(PROBE_KEY, PROBE_KEY)
            .and_then(|_| self.store.remove_item(PROBE_KEY));

        match probe {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "storage unavailable");
                false
            }
        }
    }

    /// Serialize `value` and write it under `key`. Returns false on any failure.
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        if !self.is_available() {
            warn!(key = ?key, "storage unavailable, data not saved");
            return false;
        }

        let serialized = match serde_json::to_string(value) {
            Ok(s) => s,
            Err(e) => {
                warn!(key = ?key, error = %e, "failed to serialize");
                return false;
            }
        };

        match self.store.set_item(&self.namespaced(key), &serialized) {
            Ok(()) => {
                debug!(key = ?key, bytes = serialized.len(), "saved");
                true
            }
            Err(e) => {
                warn!(key = ?key, error = %e, "failed to write");
                false
            }
        }
    }

    /// Read and deserialize `key` into `T`.
    ///
    /// The record schema of `T` drives date rehydration: every `date` field
    /// typed as `DateTime<Utc>` is parsed from its ISO string here.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        if !self.is_available() {
            warn!(key = ?key, "storage unavailable, nothing loaded");
            return None;
        }

        let serialized = match self.store.get_item(&self.namespaced(key)) {
            Ok(Some(s)) => s,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = ?key, error = %e, "failed to read");
                return None;
            }
        };

        match serde_json::from_str(&serialized) {
            Ok(value) => {
                debug!(key = ?key, "loaded");
                Some(value)
            }
            Err(e) => {
                warn!(key = ?key, error = %e, "stored data is malformed");
                None
            }
        }
    }

    /// Remove every key this application owns; other keys are untouched
    pub fn clear(&self) -> bool {
        if !self.is_available() {
            return false;
        }

        for key in StorageKey::ALL {
            if let Err(e) = self.store.remove_item(&self.namespaced(key)) {
                warn!(key = ?key, error = %e, "failed to clear");
                return false;
            }
        }
        debug!("all data cleared");
        true
    }

    /// Stored size in KiB, rounded to two decimals.
    ///
    /// Lengths are counted in UTF-16 code units so the figure matches what a
    /// browser store reports for the same data.
    pub fn size_estimate(&self) -> f64 {
        if !self.is_available() {
            return 0.0;
        }

        let mut total = 0usize;
        for key in StorageKey::ALL {
            match self.store.get_item(&self.namespaced(key)) {
                Ok(Some(value)) => total += value.encode_utf16().count(),
                Ok(None) => {}
                Err(e) => {
                    warn!(key = ?key, error = %e, "failed to measure");
                    return 0.0;
                }
            }
        }

        (total as f64 / 1024.0 * 100.0).round() / 100.0
    }
}
