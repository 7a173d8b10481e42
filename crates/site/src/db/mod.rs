//! Persistence for registrations and drink selections.
//!
//! # Layout
//!
//! Everything is stored as whole JSON values under fixed keys in a
//! [`KeyValueStorage`]:
//!
//! - `registrations` - JSON array of every registration, in submission order
//! - `drinkSelection` - JSON array of the last saved drink selection
//!
//! Values are always read and written whole; there are no partial updates.
//! [`EventStore`] is the only writer and serialises read-modify-write cycles.
//!
//! # Backends
//!
//! - [`FileStorage`] - one `<key>.json` file per key under a data directory
//! - [`MemoryStorage`] - process memory, for tests and throwaway runs

mod file;
mod memory;
mod store;

use std::path::Path;
use std::sync::Arc;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use store::{EventStore, StoreError, keys};

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The backend's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous whole-value key/value storage.
///
/// Mirrors the semantics of browser local storage: string values, no
/// transactions, last write wins.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Open the file-backed storage rooted at `data_dir`, creating it if needed.
///
/// # Errors
///
/// Returns `StorageError::Io` if the directory cannot be created.
pub fn open_storage(data_dir: &Path) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
    let storage = FileStorage::open(data_dir)?;
    Ok(Arc::new(storage))
}

/// Keys are restricted to `[A-Za-z0-9_-]+` so they map to safe file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("registrations").is_ok());
        assert!(validate_key("drinkSelection").is_ok());
        assert!(validate_key("a_b-c9").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("with space").is_err());
    }
}
