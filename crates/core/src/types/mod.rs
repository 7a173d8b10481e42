//! Core types for the grand opening site.
//!
//! This module provides type-safe wrappers for the event's domain concepts.

pub mod cart;
pub mod drink;
pub mod email;
pub mod id;
pub mod registration;

pub use cart::{Cart, CartItem};
pub use drink::{Drink, DrinkCategory, catalog, find_drink};
pub use email::{Email, EmailError};
pub use id::{ConfirmationId, RegistrationId};
pub use registration::{
    BEVERAGE_OPTIONS, DraftError, MEAL_OPTIONS, PreferenceOption, Registration, RegistrationDraft,
    preference_label,
};
