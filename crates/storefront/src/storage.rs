//! Local key-value persistence boundary.
//!
//! The storefront persists two entries across page reloads: the serialized
//! cart and the serialized user identity. [`LocalStore`] is the explicit
//! contract for that storage; stores call `write` after every mutation
//! rather than relying on a hidden reactive effect.
//!
//! Two backends are provided: [`MemoryStore`] for tests and ephemeral
//! sessions, and [`FileStore`] which keeps one `<key>.json` file per entry
//! under a data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Key for the serialized cart entries.
    pub const CART: &str = "cart";

    /// Key for the serialized user identity record.
    pub const USER: &str = "user";
}

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying storage could not be read.
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying storage could not be written.
    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key contains characters unsuitable for the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Local per-session key-value storage.
///
/// Values are opaque strings; callers own serialization. Implementations
/// must treat `read` of a missing key as `Ok(None)`, not an error.
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend itself fails; a missing key
    /// is `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend itself fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory storage backend.
///
/// State lives only as long as the value; used by tests and by sessions
/// that opt out of persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File-backed backend
// =============================================================================

/// File-backed storage: one `<key>.json` file per key under `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Resolve the file path for `key`.
    ///
    /// Keys are restricted to alphanumerics, `-` and `_` so a key can never
    /// escape the data directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LocalStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value).map_err(|source| StorageError::Write {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.read("cart").unwrap().is_none());

        store.write("cart", "[]").unwrap();
        assert_eq!(store.read("cart").unwrap().as_deref(), Some("[]"));

        store.remove("cart").unwrap();
        assert!(store.read("cart").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_remove_absent_is_noop() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.read("user").unwrap().is_none());
        store.write("user", r#"{"id":1}"#).unwrap();
        assert_eq!(store.read("user").unwrap().as_deref(), Some(r#"{"id":1}"#));

        store.remove("user").unwrap();
        assert!(store.read("user").unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_path_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.read(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.write("cart", "old").unwrap();
        store.write("cart", "new").unwrap();
        assert_eq!(store.read("cart").unwrap().as_deref(), Some("new"));
    }
}
