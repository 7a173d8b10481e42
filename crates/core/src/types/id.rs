//! Identifiers issued to registrations.
//!
//! Every registration carries two identifiers: an internal [`RegistrationId`]
//! used to key rows, and a human-shareable [`ConfirmationId`] shown to the
//! guest and used for check-in.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal identifier of a registration.
///
/// New IDs are UUID v7 strings, so they are time-ordered and two
/// registrations created within the same millisecond still get distinct IDs.
/// Stored IDs are kept as whatever string was written; older records use a
/// millisecond timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(String);

impl RegistrationId {
    /// Generate a fresh, time-ordered ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guest-facing confirmation code, e.g. `AF2025-7QK2M9XPL`.
///
/// ## Format
///
/// `AF2025-` followed by 9 characters drawn from `A-Z0-9`.
///
/// Codes are random and not checked for collisions against existing
/// registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    /// Prefix shared by every confirmation code for this event.
    pub const PREFIX: &'static str = "AF2025-";

    /// Number of random characters after the prefix.
    pub const SUFFIX_LEN: usize = 9;

    const ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Generate a new code using the thread-local RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a new code from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut code = String::with_capacity(Self::PREFIX.len() + Self::SUFFIX_LEN);
        code.push_str(Self::PREFIX);
        for _ in 0..Self::SUFFIX_LEN {
            let idx = rng.random_range(0..Self::ALPHABET.len());
            #[allow(clippy::indexing_slicing)] // idx is drawn from 0..ALPHABET.len()
            code.push(char::from(Self::ALPHABET[idx]));
        }
        Self(code)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
