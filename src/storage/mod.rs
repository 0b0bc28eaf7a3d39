//! Storage layer for the contact book
//!
//! Provides whole-file CSV persistence for the contact store and the
//! append-only audit log that records each mutation.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_contacts, read_contacts_required, write_contacts, write_contacts_file};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::models::{Contact, RecordLayout};

/// Main storage coordinator: the contact store plus its audit trail
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
    audit_warning: Option<String>,
}

impl Storage {
    /// Create a new Storage instance for the session's contacts file
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        Self::with_layout(paths, settings.layout, settings.audit_enabled)
    }

    /// Create a Storage instance with an explicit layout
    pub fn with_layout(
        paths: ContactPaths,
        layout: RecordLayout,
        audit_enabled: bool,
    ) -> Result<Self, ContactError> {
        let audit = if audit_enabled {
            paths.ensure_directories()?;
            Some(AuditLogger::new(paths.audit_log()))
        } else {
            None
        };

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file().to_path_buf(), layout),
            paths,
            audit,
            audit_warning: None,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Field layout of the contact store
    pub fn layout(&self) -> RecordLayout {
        self.contacts.layout()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ContactError> {
        self.contacts.load()
    }

    /// Save all data to disk
    pub fn save_all(&mut self) -> Result<(), ContactError> {
        self.contacts.save()
    }

    /// The audit logger, when auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Take the first audit write failure, if any occurred
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.audit_warning.take()
    }

    /// Record a contact creation
    pub fn log_create(&mut self, contact: &Contact) {
        let entry = AuditEntry::create(contact.id.to_string(), Some(contact.name.clone()), contact);
        self.record(entry);
    }

    /// Record a contact update with a field diff
    pub fn log_update(&mut self, before: &Contact, after: &Contact) {
        let diff = match (to_json(before), to_json(after)) {
            (Some(b), Some(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(
            after.id.to_string(),
            Some(after.name.clone()),
            before,
            after,
            diff,
        );
        self.record(entry);
    }

    /// Record a contact deletion
    pub fn log_delete(&mut self, contact: &Contact) {
        let entry = AuditEntry::delete(contact.id.to_string(), Some(contact.name.clone()), contact);
        self.record(entry);
    }

    /// Record an import from another file
    pub fn log_import(&mut self, source: &std::path::Path, count: usize) {
        self.record(AuditEntry::import(source.display().to_string(), count));
    }

    /// Audit failures never abort the operation being audited
    fn record(&mut self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry) {
            if self.audit_warning.is_none() {
                self.audit_warning = Some(e.to_string());
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{ContactPatch, Field};
    use tempfile::TempDir;

    fn create_storage(audit: bool) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_config_dir(temp_dir.path().to_path_buf());
        let storage = Storage::with_layout(paths, RecordLayout::Full, audit).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage(true);
        assert_eq!(storage.contacts.path(), temp_dir.path().join("contacts.csv"));
        assert!(storage.audit_logger().is_some());
    }

    #[test]
    fn test_audit_trail() {
        let (_temp_dir, mut storage) = create_storage(true);
        let contact = Contact::new("Ada", "5551234567");
        storage.log_create(&contact);

        let mut updated = contact.clone();
        updated.apply(&ContactPatch::new().with(Field::Phone, "5559999999"));
        storage.log_update(&contact, &updated);

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("phone"));
    }

    #[test]
    fn test_audit_disabled_writes_nothing() {
        let (temp_dir, mut storage) = create_storage(false);
        storage.log_delete(&Contact::new("Ada", "5551234567"));
        assert!(storage.audit_logger().is_none());
        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
