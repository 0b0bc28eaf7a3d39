//! YAML Export functionality
//!
//! Exports the contact store to YAML for human-readable backup.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::export::json::ContactExport;
use crate::models::{Contact, RecordLayout};

/// Export contacts to YAML
pub fn export_contacts_yaml<W: Write>(
    writer: &mut W,
    layout: RecordLayout,
    contacts: &[Contact],
) -> ContactResult<()> {
    let export = ContactExport::new(layout, contacts);

    writeln!(writer, "# Contact book export")
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}
