//! Path management for the contact book
//!
//! Resolves where settings and the audit log live, and which contacts file a
//! session reads and writes.
//!
//! ## Path Resolution Order
//!
//! Config directory:
//! 1. `CONTACT_BOOK_CONFIG_DIR` environment variable (if set)
//! 2. Platform config dir (`$XDG_CONFIG_HOME/contact-book`, `~/.config/contact-book`,
//!    `%APPDATA%\contact-book`)
//!
//! Contacts file:
//! 1. `--file` / `CONTACT_BOOK_FILE`
//! 2. `contacts_file` from settings
//! 3. `contacts.csv` in the working directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ContactError;

/// Default persistence file name, relative to the working directory
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.csv";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Directory holding config.json and audit.log
    config_dir: PathBuf,
    /// The persistence file for this session
    contacts_file: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance using environment and platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, ContactError> {
        let config_dir = if let Ok(custom) = std::env::var("CONTACT_BOOK_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_config_dir()?
        };

        Ok(Self {
            config_dir,
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
        })
    }

    /// Create ContactPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            contacts_file: config_dir.join(DEFAULT_CONTACTS_FILE),
            config_dir,
        }
    }

    /// Point the session at a different contacts file
    pub fn with_contacts_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.contacts_file = path.into();
        self
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.config_dir.join("audit.log")
    }

    /// Get the persistence file for this session
    pub fn contacts_file(&self) -> &Path {
        &self.contacts_file
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the platform config directory
fn resolve_default_config_dir() -> Result<PathBuf, ContactError> {
    ProjectDirs::from("", "", "contact-book")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactError::Config("Could not determine config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.contacts_file(),
            temp_dir.path().join("contacts.csv").as_path()
        );
    }

    #[test]
    fn test_contacts_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_config_dir(temp_dir.path().to_path_buf())
            .with_contacts_file("/tmp/other.csv");

        assert_eq!(paths.contacts_file(), Path::new("/tmp/other.csv"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("config");
        let paths = ContactPaths::with_config_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
