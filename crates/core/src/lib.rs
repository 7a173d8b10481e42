//! Aris Farm Core - Shared types library.
//!
//! This crate provides the types used across all Aris Farm components:
//! - `site` - Public event site and admin dashboard
//! - `cli` - Command-line tools for inspecting and exporting registrations
//!
//! # Architecture
//!
//! The core crate contains only types and functions over them - no storage or
//! network access. The CSV export writes to any `io::Write` the caller hands
//! it. Persistence lives in the site crate's store.
//!
//! # Modules
//!
//! - [`types`] - Registrations, confirmation IDs, drinks and the drink cart
//! - [`stats`] - Aggregate statistics over registrations
//! - [`export`] - CSV export of registrations
//! - [`countdown`] - Time remaining until the event starts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod countdown;
pub mod export;
pub mod stats;
pub mod types;

pub use countdown::Countdown;
pub use export::{CSV_FILENAME, CSV_HEADER, ExportError, export_csv, write_csv};
pub use stats::{PreferenceCounts, Statistics};
pub use types::*;
