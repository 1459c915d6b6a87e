//! Bounded, persistent log of successful evaluations.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use labs_store::{HISTORY_KEY, SharedStore, load_json, save_json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Entries kept, newest first.
pub const HISTORY_CAPACITY: usize = 50;

/// One successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Increasing identifier.
    id: u64,
    /// The full expression in display form, e.g. `3 × 4 − 5`.
    expression: String,
    /// The formatted result.
    result: String,
    /// When the evaluation happened.
    timestamp: DateTime<Utc>,
}

/// Evaluation history backed by the key-value store.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    store: SharedStore,
}

impl History {
    /// Loads the persisted history. Absent or malformed data yields an
    /// empty history.
    #[instrument(skip(store))]
    pub fn load(store: SharedStore) -> Self {
        let mut entries: Vec<HistoryEntry> =
            load_json(store.as_ref(), HISTORY_KEY).unwrap_or_default();
        entries.truncate(HISTORY_CAPACITY);
        info!(count = entries.len(), "History loaded");
        Self { entries, store }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends an entry, drops the oldest beyond capacity and saves.
    #[instrument(skip(self))]
    pub fn push(&mut self, expression: String, result: String) -> &HistoryEntry {
        let id = self
            .entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.entries
            .insert(0, HistoryEntry::new(id, expression, result, Utc::now()));
        self.entries.truncate(HISTORY_CAPACITY);
        save_json(self.store.as_ref(), HISTORY_KEY, &self.entries);
        &self.entries[0]
    }

    /// Empties the history and removes the persisted entry.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!(error = %e, "Failed to remove persisted history");
        }
        info!("History cleared");
    }
}
