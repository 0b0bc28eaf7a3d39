//! CSV Export functionality
//!
//! Writes the same header-plus-rows format as the persistence file, so an
//! export can be imported or used as a contacts file directly.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, RecordLayout};
use crate::storage::write_contacts;

/// Export contacts to CSV
pub fn export_contacts_csv<W: Write>(
    writer: &mut W,
    layout: RecordLayout,
    contacts: &[Contact],
) -> ContactResult<()> {
    write_contacts(writer, layout, contacts).map_err(|e| ContactError::Export(e.to_string()))
}
