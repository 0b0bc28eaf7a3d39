//! Export module for the contact book
//!
//! Serializes the current store to a user-chosen path:
//! - CSV: the persistence format, importable again
//! - JSON: machine-readable snapshot
//! - YAML: human-readable snapshot
//!
//! Exports never touch the store or the session's contacts file.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, RecordLayout};

pub use self::csv::export_contacts_csv;
pub use json::{export_contacts_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_contacts_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV with the layout's header (default)
    #[default]
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
}

impl ExportFormat {
    /// Guess a format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ExportFormat::Json,
            Some("yaml") | Some("yml") => ExportFormat::Yaml,
            _ => ExportFormat::Csv,
        }
    }
}

/// Write contacts to a file in the given format
pub fn export_to_path(
    path: &Path,
    format: ExportFormat,
    layout: RecordLayout,
    contacts: &[Contact],
) -> ContactResult<()> {
    let file = File::create(path).map_err(|e| {
        ContactError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_contacts_csv(&mut writer, layout, contacts)?,
        ExportFormat::Json => export_contacts_json(&mut writer, layout, contacts, true)?,
        ExportFormat::Yaml => export_contacts_yaml(&mut writer, layout, contacts)?,
    }

    writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out.JSON")),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out.yml")),
            ExportFormat::Yaml
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out")),
            ExportFormat::Csv
        );
    }
}
