//! RSVP registrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::email::{Email, EmailError};
use super::id::{ConfirmationId, RegistrationId};

/// A selectable value on one of the RSVP form's preference dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceOption {
    /// Value stored on the registration.
    pub value: &'static str,
    /// Label shown to guests and on the dashboard.
    pub label: &'static str,
}

/// Meal preferences offered on the RSVP form.
pub const MEAL_OPTIONS: &[PreferenceOption] = &[
    PreferenceOption {
        value: "braai",
        label: "Traditional Braai/Meat",
    },
    PreferenceOption {
        value: "vegetarian",
        label: "Vegetarian",
    },
    PreferenceOption {
        value: "vegan",
        label: "Vegan",
    },
    PreferenceOption {
        value: "namibian",
        label: "Traditional Namibian (Kapana, Mahangu)",
    },
];

/// Beverage preferences offered on the RSVP form.
pub const BEVERAGE_OPTIONS: &[PreferenceOption] = &[
    PreferenceOption {
        value: "soft",
        label: "Soft Drinks",
    },
    PreferenceOption {
        value: "beer",
        label: "Beer",
    },
    PreferenceOption {
        value: "wine",
        label: "Wine",
    },
    PreferenceOption {
        value: "traditional",
        label: "Traditional Brews",
    },
    PreferenceOption {
        value: "all",
        label: "All Options",
    },
];

/// Human label for a stored preference value.
///
/// Unknown values (e.g. from older data) are shown as-is.
#[must_use]
pub fn preference_label(value: &str) -> &str {
    MEAL_OPTIONS
        .iter()
        .chain(BEVERAGE_OPTIONS)
        .find(|opt| opt.value == value)
        .map_or(value, |opt| opt.label)
}

fn is_offered(options: &[PreferenceOption], value: &str) -> bool {
    value.is_empty() || options.iter().any(|opt| opt.value == value)
}

/// One stored RSVP.
///
/// Field names serialize in camelCase to keep the persisted JSON layout
/// (`fullName`, `mealPreference`, `confirmationId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub attendees: u32,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default)]
    pub meal_preference: String,
    #[serde(default)]
    pub beverage_preference: String,
    pub timestamp: DateTime<Utc>,
    pub confirmation_id: ConfirmationId,
}

/// Errors raised when a draft does not satisfy the RSVP form's constraints.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is blank.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The email address is malformed.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
    /// Fewer than one attendee.
    #[error("at least one attendee is required")]
    NoAttendees,
    /// A preference value that is not on the form.
    #[error("unknown {field}: {value}")]
    UnknownPreference {
        /// Which dropdown.
        field: &'static str,
        /// Submitted value.
        value: String,
    },
}

const fn default_attendees() -> u32 {
    1
}

/// The user-entered part of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_attendees")]
    pub attendees: u32,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default)]
    pub meal_preference: String,
    #[serde(default)]
    pub beverage_preference: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            attendees: default_attendees(),
            accessibility: String::new(),
            meal_preference: String::new(),
            beverage_preference: String::new(),
        }
    }
}

impl RegistrationDraft {
    /// Check the draft against the constraints the RSVP form enforces.
    ///
    /// The store itself accepts any draft; this is for the layers in front
    /// of it (form handler, CLI seeding).
    ///
    /// # Errors
    ///
    /// Returns the first constraint the draft violates.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.full_name.trim().is_empty() {
            return Err(DraftError::Missing("full name"));
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::Missing("email"));
        }
        Email::parse(&self.email)?;
        if self.phone.trim().is_empty() {
            return Err(DraftError::Missing("phone"));
        }
        if self.attendees == 0 {
            return Err(DraftError::NoAttendees);
        }
        if !is_offered(MEAL_OPTIONS, &self.meal_preference) {
            return Err(DraftError::UnknownPreference {
                field: "meal preference",
                value: self.meal_preference.clone(),
            });
        }
        if !is_offered(BEVERAGE_OPTIONS, &self.beverage_preference) {
            return Err(DraftError::UnknownPreference {
                field: "beverage preference",
                value: self.beverage_preference.clone(),
            });
        }
        Ok(())
    }

    /// Turn the draft into a registration created at `now`.
    ///
    /// Generates a fresh [`RegistrationId`] and [`ConfirmationId`].
    #[must_use]
    pub fn into_registration(self, now: DateTime<Utc>) -> Registration {
        Registration {
            id: RegistrationId::generate(),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            attendees: self.attendees,
            accessibility: self.accessibility,
            meal_preference: self.meal_preference,
            beverage_preference: self.beverage_preference,
            timestamp: now,
            confirmation_id: ConfirmationId::generate(),
        }
    }
}
