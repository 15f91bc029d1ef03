//! Durable key-value storage backends.
//!
//! The record store persists through a single named slot in a key-value
//! backend.  `FileBackend` maps each slot to a JSON file under a storage
//! directory; `MemoryBackend` keeps slots in a map so the store can be
//! exercised in tests without touching the filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{PassopError, Result};

/// Abstraction over the durable key-value store that holds serialized
/// record collections.
pub trait StorageBackend {
    /// Read the value stored under `key`.  Returns `None` if the slot
    /// has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the slot under `key` with `value`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-based backend: one file per slot under a storage directory.
///
/// A slot named `passwords` lives at `<dir>/passwords.json`.  The
/// directory is created lazily on the first write, so a fresh checkout
/// needs no init step before reading (missing slot reads as `None`).
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory this backend writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PassopError::Storage(format!(
                "reading {}: {e}",
                path.display()
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Write to a temp file, then rename, so a crash mid-write never
        // leaves a truncated slot behind.
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path).map_err(|e| {
            PassopError::Storage(format!("replacing {}: {e}", path.display()))
        })?;
        Ok(())
    }
}

/// In-memory backend used by tests.
#[derive(Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with pre-existing content (e.g. to simulate a
    /// previous session or a corrupted slot).
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.slots.insert(key.to_string(), value.to_string());
        backend
    }

    /// Inspect a slot's raw contents without going through the store.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
