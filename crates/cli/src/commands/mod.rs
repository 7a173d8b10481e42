//! Command implementations.
//!
//! Each command writes its output to a caller-supplied writer so it can be
//! tested without a terminal.

pub mod registrations;
pub mod seed;
pub mod selection;

use thiserror::Error;

use aris_farm_core::{DraftError, ExportError};
use aris_farm_site::db::{StorageError, StoreError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The data directory could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A registration could not be stored.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Registrations could not be written as CSV.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid YAML for a list of registrations.
    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A seed entry fails the RSVP form's checks.
    #[error("Seed entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: DraftError,
    },
}
