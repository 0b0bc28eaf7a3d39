//! JSON Export functionality
//!
//! Exports the contact store to JSON inside a small versioned wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, RecordLayout};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full contact book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Field layout the contacts were exported with
    pub layout: RecordLayout,

    /// All contacts, in store order
    pub contacts: Vec<Contact>,
}

impl ContactExport {
    /// Snapshot the given contacts
    pub fn new(layout: RecordLayout, contacts: &[Contact]) -> Self {
        let contacts = contacts
            .iter()
            .cloned()
            .map(|mut c| {
                c.restrict_to(layout);
                c
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            layout,
            contacts,
        }
    }
}

/// Export contacts to JSON
pub fn export_contacts_json<W: Write>(
    writer: &mut W,
    layout: RecordLayout,
    contacts: &[Contact],
    pretty: bool,
) -> ContactResult<()> {
    let export = ContactExport::new(layout, contacts);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| ContactError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}
