//! Key/value persistence stores.
//!
//! `KeyValueStore` is the capability the saved-list controller is written
//! against. Two implementations are provided:
//! - `MemoryStore`: process-local map, used by tests and throwaway runs
//! - `FileStore`: a JSON object file on disk, one string value per key
//!
//! Both are synchronous and do no locking across processes: two writers
//! sharing the same file follow last-writer-wins. `FileStore` writes through
//! a temp file named after the process id, so two `FileStore`s on one path
//! inside a single process also share that temp file.

use crate::error::{Result, StoreError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A durable string-to-string store.
pub trait KeyValueStore {
    /// Read the value under `key`; `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds one value.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// Store persisted as a single JSON object file.
///
/// The file is read on every `get` and rewritten on every `set`, so two
/// `FileStore`s over the same path see each other's writes. Writes go to a
/// sibling temp file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Backend {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let text = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Backend {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        // Per-process name; writers in one process still share it
        tmp_name.push(format!(".{}.tmp", std::process::id()));
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, text).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        debug!("Wrote key {:?} to {}", key, self.path.display());
        Ok(())
    }
}
