//! Key-value persistence backends.
//!
//! The session saves its whole state as one JSON string under a single key
//! after every change, and reads it back on startup.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// A string key-value store.
pub trait KeyValueStore {
    /// Returns the value saved under `key`, or `None` if nothing was saved.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Saves `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> EngineResult<()>;
}

/// An in-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that keeps each key in its own `<key>.json` file.
///
/// Keys are restricted to ASCII letters, digits, `-` and `_` so they always
/// map to a file directly inside the store directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for `key`.
    pub fn path_for(&self, key: &str) -> EngineResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EngineError::StorageError {
                key: key.to_string(),
                message: "key may only contain letters, digits, '-' and '_'".to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EngineError::StorageError {
                key: key.to_string(),
                message: format!("failed to read {}: {}", path.display(), e),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        let path = self.path_for(key)?;
        let to_storage_error = |e: std::io::Error| EngineError::StorageError {
            key: key.to_string(),
            message: format!("failed to write {}: {}", path.display(), e),
        };

        fs::create_dir_all(&self.dir).map_err(to_storage_error)?;
        fs::write(&path, value).map_err(to_storage_error)
    }
}
