//! Registration and drink-selection store.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use aris_farm_core::{Cart, Registration, RegistrationDraft};

use super::{KeyValueStorage, StorageError};

/// Storage keys used by the store.
pub mod keys {
    /// JSON array of every registration.
    pub const REGISTRATIONS: &str = "registrations";

    /// JSON array of the last saved drink selection.
    pub const DRINK_SELECTION: &str = "drinkSelection";
}

/// Errors raised by store writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    /// A value could not be encoded as JSON.
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    /// A previous writer panicked while holding the write lock.
    #[error("store write lock poisoned")]
    Poisoned,
}

/// Outcome of reading one collection.
enum Decoded<T> {
    Absent,
    Valid(T),
    /// The stored value is not valid JSON for `T`; the raw text is kept so it
    /// can be preserved before being overwritten.
    Corrupt(String),
}

/// The registration and drink-selection store.
///
/// Constructed once per process and shared by reference. Reads never fail:
/// missing, unreadable or corrupt data reads as an empty collection (see
/// [`EventStore::decode_or_empty`]). Writes rewrite the whole collection and
/// are serialised by an internal lock, so concurrent submissions cannot lose
/// each other's records.
pub struct EventStore {
    storage: Arc<dyn KeyValueStorage>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore").finish_non_exhaustive()
    }
}

impl EventStore {
    /// Create a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// All registrations in submission order.
    #[must_use]
    pub fn list_registrations(&self) -> Vec<Registration> {
        self.decode_or_empty(keys::REGISTRATIONS)
    }

    /// Create a registration from `draft` and append it.
    ///
    /// Assigns a fresh ID, the current time and a confirmation code, then
    /// rewrites the whole collection. The draft is not validated here.
    ///
    /// If the stored collection is corrupt it is copied to a
    /// `registrations-corrupt-<millis>` key and a new collection is started.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read or written. An
    /// unreadable collection is never overwritten.
    pub fn append_registration(
        &self,
        draft: RegistrationDraft,
    ) -> Result<Registration, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut registrations: Vec<Registration> = match self.decode(keys::REGISTRATIONS)? {
            Decoded::Valid(list) => list,
            Decoded::Absent => Vec::new(),
            Decoded::Corrupt(raw) => {
                self.preserve_corrupt(keys::REGISTRATIONS, &raw)?;
                Vec::new()
            }
        };

        let registration = draft.into_registration(Utc::now());
        registrations.push(registration.clone());
        self.write(keys::REGISTRATIONS, &registrations)?;

        tracing::info!(
            confirmation_id = %registration.confirmation_id,
            attendees = registration.attendees,
            total = registrations.len(),
            "Registration stored"
        );
        Ok(registration)
    }

    /// Persist `cart` as the drink selection, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn save_selection(&self, cart: &Cart) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.write(keys::DRINK_SELECTION, cart)?;
        tracing::info!(
            drinks = cart.items().len(),
            servings = cart.total_items(),
            "Drink selection saved"
        );
        Ok(())
    }

    /// The last saved drink selection, empty if none.
    #[must_use]
    pub fn saved_selection(&self) -> Cart {
        self.decode_or_empty(keys::DRINK_SELECTION)
    }

    /// Whether the backing storage can currently be read.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.storage.get(keys::REGISTRATIONS).is_ok()
    }

    /// Read a collection, falling back to empty on any problem.
    ///
    /// This is the store's only recovery path: an absent key, a storage read
    /// failure and unparseable JSON all yield `T::default()`. Failures are
    /// logged, never returned.
    fn decode_or_empty<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.decode(key) {
            Ok(Decoded::Valid(value)) => value,
            Ok(Decoded::Absent) => T::default(),
            Ok(Decoded::Corrupt(_)) => {
                tracing::warn!(key, "Stored value is corrupt, treating as empty");
                T::default()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed, treating as empty");
                T::default()
            }
        }
    }

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<Decoded<T>, StorageError> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(Decoded::Absent);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Decoded::Valid(value)),
            Err(e) => {
                tracing::debug!(key, error = %e, "Failed to decode stored value");
                Ok(Decoded::Corrupt(raw))
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)?;
        Ok(())
    }

    fn preserve_corrupt(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        let backup_key = format!("{key}-corrupt-{}", Utc::now().timestamp_millis());
        self.storage.set(&backup_key, raw)?;
        tracing::warn!(key, backup_key, "Corrupt collection preserved before overwrite");
        Ok(())
    }
}
