//! CSV export of registrations.
//!
//! Fields containing a comma, quote or line break are quoted (RFC 4180);
//! everything else is written bare, so ordinary exports look exactly like a
//! plain comma-joined table.

use std::io::Write;

use crate::types::Registration;

/// Download filename for the export.
pub const CSV_FILENAME: &str = "aris-farm-registrations.csv";

/// Header row, in column order.
pub const CSV_HEADER: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "Attendees",
    "Meal Preference",
    "Beverage Preference",
    "Special Requirements",
    "Registration Date",
    "Confirmation ID",
];

/// Errors that can occur while writing the export.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The output was not valid UTF-8 (only possible if a field was not).
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write the header and one row per registration to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_csv<W: Write>(out: W, registrations: &[Registration]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for reg in registrations {
        let attendees = reg.attendees.to_string();
        let date = reg.timestamp.format("%Y-%m-%d").to_string();
        writer.write_record([
            reg.full_name.as_str(),
            reg.email.as_str(),
            reg.phone.as_str(),
            attendees.as_str(),
            reg.meal_preference.as_str(),
            reg.beverage_preference.as_str(),
            reg.accessibility.as_str(),
            date.as_str(),
            reg.confirmation_id.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the export as a string.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_csv(registrations: &[Registration]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, registrations)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::RegistrationDraft;

    fn reg(name: &str, accessibility: &str) -> Registration {
        RegistrationDraft {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "0811234567".to_string(),
            attendees: 2,
            accessibility: accessibility.to_string(),
            meal_preference: "braai".to_string(),
            beverage_preference: "beer".to_string(),
        }
        .into_registration(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap())
    }

    const HEADER_LINE: &str = "Name,Email,Phone,Attendees,Meal Preference,Beverage Preference,Special Requirements,Registration Date,Confirmation ID";

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv, format!("{HEADER_LINE}\n"));
    }

    #[test]
    fn test_rows_follow_header_in_order() {
        let regs = [reg("Jane Doe", ""), reg("John Smith", "")];
        let csv = export_csv(&regs).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER_LINE);
        assert!(lines[1].starts_with("Jane Doe,jane.doe@example.com,0811234567,2,braai,beer,,2025-03-01,AF2025-"));
        assert!(lines[2].starts_with("John Smith,"));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let regs = [reg("Doe, Jane", "Wheelchair \"access\"\nplease")];
        let csv = export_csv(&regs).unwrap();
        assert!(csv.contains("\"Doe, Jane\""));
        assert!(csv.contains("\"Wheelchair \"\"access\"\"\nplease\""));

        // Reading back yields the original nine fields
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 9);
        assert_eq!(&record[0], "Doe, Jane");
        assert_eq!(&record[6], "Wheelchair \"access\"\nplease");
    }
}
