//! JSON-file store adapter.

use crate::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Store persisted as a single JSON object on disk.
///
/// The file is read once when the store is opened and rewritten in full on
/// every `set` or `remove`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is logged and treated as empty; it is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                StoreError::new(format!("Failed to read '{}': {}", path.display(), e))
            })?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Store file is malformed, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            debug!("Store file not found, starting empty");
            BTreeMap::new()
        };

        info!(keys = entries.len(), "File store opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[instrument(skip(self, entries), fields(path = %self.path.display()))]
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-write leaves the old file intact.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(keys = entries.len(), "Store flushed");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }

    #[instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
