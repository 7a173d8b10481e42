//! Saved drink selection.

use std::io::Write;

use aris_farm_site::db::EventStore;

use super::CliError;

/// Print the last saved drink selection.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show(store: &EventStore, out: &mut impl Write) -> Result<(), CliError> {
    let selection = store.saved_selection();
    if selection.is_empty() {
        writeln!(out, "No drink selection saved")?;
        return Ok(());
    }

    for item in selection.items() {
        writeln!(
            out,
            "{} x{} ({})",
            item.drink.name,
            item.quantity,
            item.drink.category.label()
        )?;
    }
    writeln!(out, "{} item(s)", selection.total_items())?;
    Ok(())
}
