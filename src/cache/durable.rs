//! Durable Store Module
//!
//! The persistence tier beneath the in-process map. Implementations are
//! injected into `CacheStore` so tests can use an in-memory fake while
//! production uses the file-backed store.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;

// == Durable Store Trait ==
/// Key/value persistence surviving process restarts.
///
/// Writes may fail (capacity, I/O); reads and deletes are best-effort.
/// The durable store may hold data that does not belong to the cache;
/// `CacheStore` only ever touches keys it namespaced itself.
pub trait DurableStore: Debug + Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &str);

    /// Lists every stored key.
    fn keys(&self) -> Vec<String>;
}

// == Memory Store ==
/// HashMap-backed durable store with an optional entry capacity.
///
/// Serves as the default tier and as the test double for capacity and
/// corruption scenarios. Inserting a *new* key at capacity fails;
/// overwriting an existing key always succeeds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            if let Some(capacity) = self.capacity {
                if self.entries.len() >= capacity {
                    return Err(StoreError::Capacity(format!(
                        "store holds {} of {} entries",
                        self.entries.len(),
                        capacity
                    )));
                }
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

// == File Store ==
/// File-backed durable store: one JSON file holding the full key/value map.
///
/// Cache keys contain `/` and JSON punctuation, so a single mapping file
/// avoids filename encoding entirely. The file is loaded once at open and
/// rewritten on every mutation. A missing or corrupt file opens as an empty
/// store; it is rewritten cleanly on the next set.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl FileStore {
    /// Opens (or creates) a file-backed store at `path`.
    pub fn open(path: impl Into<PathBuf>, capacity: Option<usize>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt cache file, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        Ok(Self {
            path,
            entries,
            capacity,
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.entries)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            if let Some(capacity) = self.capacity {
                if self.entries.len() >= capacity {
                    return Err(StoreError::Capacity(format!(
                        "store holds {} of {} entries",
                        self.entries.len(),
                        capacity
                    )));
                }
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Err(err) = self.flush() {
                warn!(path = %self.path.display(), %err, "failed to persist delete");
            }
        }
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
