//! CSV file I/O for contact records
//!
//! Files carry a header row naming the layout's columns, then one row per
//! record. Columns are matched by header name on read, so files written with a
//! different field set still load. Writes truncate and rewrite the whole file
//! in place; there is no temp-file-and-rename step.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::ContactError;
use crate::models::{Contact, Field, RecordLayout};

/// Read contacts from a file, returning an empty list if it doesn't exist
pub fn read_contacts<P: AsRef<Path>>(
    path: P,
    layout: RecordLayout,
) -> Result<Vec<Contact>, ContactError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    parse_contacts(path, layout)
}

/// Read contacts from a file, returning an error if it doesn't exist
pub fn read_contacts_required<P: AsRef<Path>>(
    path: P,
    layout: RecordLayout,
) -> Result<Vec<Contact>, ContactError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ContactError::file_not_found(path));
    }

    parse_contacts(path, layout)
}

fn parse_contacts(path: &Path, layout: RecordLayout) -> Result<Vec<Contact>, ContactError> {
    let file = File::open(path)
        .map_err(|e| ContactError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ContactError::Csv(format!("Failed to parse {}: {}", path.display(), e)))?
        .clone();
    let columns = column_indexes(&headers, layout);

    let mut contacts = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            ContactError::Csv(format!(
                "Failed to parse {} at row {}: {}",
                path.display(),
                row + 2,
                e
            ))
        })?;

        let mut contact = Contact::new("", "");
        for &(field, index) in &columns {
            if let Some(value) = index.and_then(|i| record.get(i)) {
                contact.set(field, value);
            }
        }
        contacts.push(contact);
    }

    Ok(contacts)
}

/// Map each layout field to its column in the file, if present
fn column_indexes(headers: &StringRecord, layout: RecordLayout) -> Vec<(Field, Option<usize>)> {
    layout
        .fields()
        .iter()
        .map(|&field| (field, headers.iter().position(|h| h == field.header())))
        .collect()
}

/// Write contacts as CSV to any writer, header first
pub fn write_contacts<W: Write>(
    writer: W,
    layout: RecordLayout,
    contacts: &[Contact],
) -> Result<(), ContactError> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer.write_record(layout.headers())?;
    for contact in contacts {
        csv_writer.write_record(layout.fields().iter().map(|&field| contact.get(field)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Io(format!("Failed to flush contacts: {}", e)))?;

    Ok(())
}

/// Overwrite a file with the given contacts
pub fn write_contacts_file<P: AsRef<Path>>(
    path: P,
    layout: RecordLayout,
    contacts: &[Contact],
) -> Result<(), ContactError> {
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| ContactError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    write_contacts(file, layout, contacts)
}
