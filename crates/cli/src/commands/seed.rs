//! Seed registrations from a YAML file.
//!
//! The file holds a list of registrations using the stored field names:
//!
//! ```yaml
//! - fullName: Jane Doe
//!   email: jane@example.com
//!   phone: "+264 81 000 0000"
//!   attendees: 2
//!   mealPreference: braai
//! - fullName: Tom Shikongo
//!   email: tom@example.com
//!   phone: "0811234567"
//! ```
//!
//! Every entry is validated before anything is written, so a bad file leaves
//! the store untouched.

use std::path::Path;

use aris_farm_core::RegistrationDraft;
use aris_farm_site::db::EventStore;

use super::CliError;

/// Parse and validate registrations from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or an entry is invalid.
pub fn parse_drafts(yaml: &str) -> Result<Vec<RegistrationDraft>, CliError> {
    let drafts: Vec<RegistrationDraft> = serde_yaml::from_str(yaml)?;
    for (index, draft) in drafts.iter().enumerate() {
        draft
            .validate()
            .map_err(|source| CliError::InvalidEntry { index, source })?;
    }
    Ok(drafts)
}

/// Append every registration in the YAML file at `path`.
///
/// Returns the number of registrations appended.
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails validation, or a
/// registration cannot be stored.
pub fn registrations_from_file(store: &EventStore, path: &Path) -> Result<usize, CliError> {
    tracing::info!(path = %path.display(), "Loading registrations from file");
    let content = std::fs::read_to_string(path)?;
    let drafts = parse_drafts(&content)?;
    tracing::info!(count = drafts.len(), "Seed file validated");

    let count = drafts.len();
    for draft in drafts {
        let registration = store.append_registration(draft)?;
        tracing::debug!(confirmation_id = %registration.confirmation_id, "Seeded registration");
    }
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use aris_farm_site::db::MemoryStorage;

    use super::*;

    const GUESTS: &str = "
- fullName: Jane Doe
  email: jane@example.com
  phone: \"+264 81 000 0000\"
  attendees: 2
  mealPreference: braai
- fullName: Tom Shikongo
  email: tom@example.com
  phone: \"0811234567\"
";

    #[test]
    fn test_parse_drafts_applies_defaults() {
        let drafts = parse_drafts(GUESTS).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].attendees, 2);
        assert_eq!(drafts[0].meal_preference, "braai");
        assert_eq!(drafts[1].attendees, 1);
        assert_eq!(drafts[1].beverage_preference, "");
    }

    #[test]
    fn test_invalid_entry_is_reported_by_index() {
        let yaml = "
- fullName: Jane Doe
  email: jane@example.com
  phone: \"0811234567\"
- fullName: No Email
  email: not-an-email
  phone: \"0811234567\"
";
        let err = parse_drafts(yaml).unwrap_err();
        assert!(matches!(err, CliError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn test_seed_appends_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guests.yaml");
        std::fs::write(&path, GUESTS).unwrap();
        let store = EventStore::new(Arc::new(MemoryStorage::new()));

        assert_eq!(registrations_from_file(&store, &path).unwrap(), 2);

        let names: Vec<_> = store
            .list_registrations()
            .into_iter()
            .map(|r| r.full_name)
            .collect();
        assert_eq!(names, ["Jane Doe", "Tom Shikongo"]);
    }

    #[test]
    fn test_bad_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guests.yaml");
        std::fs::write(&path, "- fullName: Jane Doe\n  email: jane@example.com\n  phone: ''\n").unwrap();
        let store = EventStore::new(Arc::new(MemoryStorage::new()));

        assert!(registrations_from_file(&store, &path).is_err());
        assert!(store.list_registrations().is_empty());
    }
}
