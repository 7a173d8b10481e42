//! Registration listing, statistics and CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use aris_farm_core::{PreferenceCounts, Statistics, preference_label, write_csv};
use aris_farm_site::db::EventStore;

use super::CliError;

/// Print one line per registration, oldest first.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn list(store: &EventStore, out: &mut impl Write) -> Result<(), CliError> {
    let registrations = store.list_registrations();
    if registrations.is_empty() {
        writeln!(out, "No registrations yet")?;
        return Ok(());
    }

    for reg in &registrations {
        writeln!(
            out,
            "{}  {}  {} <{}>  {}  attendees={}",
            reg.confirmation_id,
            reg.timestamp.format("%Y-%m-%d %H:%M"),
            reg.full_name,
            reg.email,
            reg.phone,
            reg.attendees,
        )?;
    }
    writeln!(out, "{} registration(s)", registrations.len())?;
    Ok(())
}

/// Print totals and the meal and beverage breakdowns.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn stats(store: &EventStore, out: &mut impl Write) -> Result<(), CliError> {
    let stats = Statistics::compute(&store.list_registrations());

    writeln!(out, "Total registrations: {}", stats.total_registrations)?;
    writeln!(out, "Total attendees: {}", stats.total_attendees)?;
    write_breakdown(out, "Meal preferences", &stats.meal_stats, &stats)?;
    write_breakdown(out, "Beverage preferences", &stats.beverage_stats, &stats)?;
    Ok(())
}

fn write_breakdown(
    out: &mut impl Write,
    title: &str,
    counts: &PreferenceCounts,
    stats: &Statistics,
) -> Result<(), CliError> {
    writeln!(out, "{title}:")?;
    if counts.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (value, count) in counts.iter() {
        writeln!(
            out,
            "  {}: {count} ({:.1}%)",
            preference_label(value),
            stats.percent_of_registrations(count)
        )?;
    }
    Ok(())
}

/// Write every registration as CSV to `output`, or to `stdout` if none.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the CSV written.
pub fn export(
    store: &EventStore,
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<(), CliError> {
    let registrations = store.list_registrations();
    match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            write_csv(file, &registrations)?;
            tracing::info!(rows = registrations.len(), path = %path.display(), "Registrations exported");
        }
        None => write_csv(stdout, &registrations)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use aris_farm_core::{CSV_HEADER, RegistrationDraft};
    use aris_farm_site::db::MemoryStorage;

    use super::*;

    fn store_with_guests() -> EventStore {
        let store = EventStore::new(Arc::new(MemoryStorage::new()));
        for (name, attendees, meal) in [("Jane Doe", 2, "braai"), ("Tom Shikongo", 1, "")] {
            store
                .append_registration(RegistrationDraft {
                    full_name: name.to_string(),
                    email: "guest@example.com".to_string(),
                    phone: "0811234567".to_string(),
                    attendees,
                    meal_preference: meal.to_string(),
                    ..RegistrationDraft::default()
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_list_empty_store() {
        let store = EventStore::new(Arc::new(MemoryStorage::new()));
        let mut out = Vec::new();
        list(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No registrations yet\n");
    }

    #[test]
    fn test_list_in_submission_order() {
        let store = store_with_guests();
        let mut out = Vec::new();
        list(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let jane = text.find("Jane Doe").unwrap();
        let tom = text.find("Tom Shikongo").unwrap();
        assert!(jane < tom);
        assert!(text.ends_with("2 registration(s)\n"));
    }

    #[test]
    fn test_stats_output() {
        let store = store_with_guests();
        let mut out = Vec::new();
        stats(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total registrations: 2"));
        assert!(text.contains("Total attendees: 3"));
        assert!(text.contains("Traditional Braai/Meat: 1 (50.0%)"));
        assert!(text.contains("Beverage preferences:\n  (none)"));
    }

    #[test]
    fn test_export_to_file() {
        let store = store_with_guests();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut stdout = Vec::new();

        export(&store, Some(&path), &mut stdout).unwrap();

        assert!(stdout.is_empty());
        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_export_to_stdout() {
        let store = EventStore::new(Arc::new(MemoryStorage::new()));
        let mut stdout = Vec::new();
        export(&store, None, &mut stdout).unwrap();
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!("{}\n", CSV_HEADER.join(","))
        );
    }
}
