//! Typed JSON helpers over a [`KeyValueStore`].

use crate::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Loads and decodes the JSON value stored under `key`.
///
/// Returns `None` when the key is absent, when the stored text is not valid
/// JSON for `T`, or when the backend fails. Callers reinitialize to their
/// zero state in every case.
#[instrument(skip(store))]
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored value");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Store read failed, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "Stored value is malformed, treating as absent");
            None
        }
    }
}

/// Encodes `value` as JSON and stores it under `key`.
///
/// Persistence is fire-and-forget: failures are logged, never returned.
#[instrument(skip(store, value))]
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(error = %e, "Failed to encode value");
            return;
        }
    };

    if let Err(e) = store.set(key, encoded) {
        warn!(error = %e, "Store write failed");
    }
}
