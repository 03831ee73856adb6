//! Key-value storage port for session mirroring.
//!
//! The session store mirrors its fields into a string-keyed side channel
//! with browser local-storage semantics: synchronous, best-effort, and
//! possibly cleared behind the application's back. [`KeyValueStore`] is the
//! seam; [`MemoryStore`] is the in-process implementation used by tests and
//! ephemeral sessions.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Persisted contents are not valid JSON.
    #[error("storage encoding error: {0}")]
    Json(#[from] serde_json::Error),
    /// Backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string-keyed get/set/remove surface.
pub trait KeyValueStore {
    /// Read a value. Absent keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Whether `key` is currently present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("userId", "u1").unwrap();
        store.set("userId", "u2").unwrap();
        assert_eq!(store.get("userId").unwrap().as_deref(), Some("u2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let mut store = MemoryStore::with_entries([("token", "abc")]);
        store.remove("missing").unwrap();
        store.remove("token").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_flag<S: KeyValueStore>(mut storage: S) {
            storage.set("isAdmin", "true").unwrap();
        }

        let mut store = MemoryStore::new();
        write_flag(&mut store);
        assert!(store.contains("isAdmin"));
    }
}
