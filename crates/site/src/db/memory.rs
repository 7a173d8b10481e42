//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{KeyValueStorage, StorageError, validate_key};

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let values = self.values.read().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut values = self.values.write().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("registrations").unwrap(), None);

        storage.set("registrations", "[]").unwrap();
        assert_eq!(storage.get("registrations").unwrap().as_deref(), Some("[]"));

        storage.set("registrations", "[1]").unwrap();
        assert_eq!(storage.get("registrations").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_rejects_bad_keys() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.set("a/b", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
