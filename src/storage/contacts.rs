//! Contact repository for CSV storage
//!
//! Holds the session's ordered contacts in memory and rewrites the whole
//! persistence file on save.

use std::path::{Path, PathBuf};

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactId, ContactPatch, RecordLayout};

use super::file_io::{read_contacts, write_contacts_file};

/// Repository for contact persistence
pub struct ContactRepository {
    path: PathBuf,
    layout: RecordLayout,
    contacts: Vec<Contact>,
    dirty: bool,
}

impl ContactRepository {
    /// Create a new, empty contact repository
    pub fn new(path: PathBuf, layout: RecordLayout) -> Self {
        Self {
            path,
            layout,
            contacts: Vec::new(),
            dirty: false,
        }
    }

    /// Load contacts from disk; a missing file loads as empty
    pub fn load(&mut self) -> ContactResult<()> {
        self.contacts = read_contacts(&self.path, self.layout)?;
        self.dirty = false;
        Ok(())
    }

    /// Save contacts to disk, overwriting the file
    pub fn save(&mut self) -> ContactResult<()> {
        write_contacts_file(&self.path, self.layout, &self.contacts)?;
        self.dirty = false;
        Ok(())
    }

    /// Persistence file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Field layout for this repository
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Whether there are mutations not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// All contacts in store order
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Get a contact by ID
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Apply a patch to a contact, returning it before and after
    ///
    /// The store only becomes dirty when a field actually changed.
    pub fn apply_patch(
        &mut self,
        id: ContactId,
        patch: &ContactPatch,
    ) -> ContactResult<(Contact, Contact)> {
        let layout = self.layout;
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ContactError::contact_not_found(id.to_string()))?;

        let before = contact.clone();
        let mut changed = contact.apply(patch);
        contact.restrict_to(layout);
        changed &= !before.same_fields(contact);
        let after = contact.clone();

        if changed {
            self.dirty = true;
        }
        Ok((before, after))
    }

    /// Append a contact to the end of the store
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.dirty = true;
    }

    /// Append many contacts, in order, without de-duplication
    pub fn extend(&mut self, contacts: Vec<Contact>) {
        if contacts.is_empty() {
            return;
        }
        self.contacts.extend(contacts);
        self.dirty = true;
    }

    /// Remove a contact by ID
    pub fn remove(&mut self, id: ContactId) -> ContactResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ContactError::contact_not_found(id.to_string()))?;
        self.dirty = true;
        Ok(self.contacts.remove(index))
    }

    /// Count contacts
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ContactRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.csv");
        let repo = ContactRepository::new(path, RecordLayout::Full);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count(), 0);
        assert!(!repo.is_dirty());
    }

    #[test]
    fn test_push_and_get() {
        let (_temp_dir, mut repo) = create_test_repo();
        let contact = Contact::new("Test Person", "5551234567");
        let id = contact.id;

        repo.push(contact);

        assert_eq!(repo.get(id).unwrap().name, "Test Person");
        assert!(repo.is_dirty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.push(Contact::new("First", "5550000001"));
        repo.push(Contact::new("Second", "5550000002"));
        repo.save().unwrap();
        assert!(!repo.is_dirty());

        let path = temp_dir.path().join("contacts.csv");
        let mut repo2 = ContactRepository::new(path, RecordLayout::Full);
        repo2.load().unwrap();

        let names: Vec<_> = repo2.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut repo) = create_test_repo();
        let contact = Contact::new("Gone", "5550000000");
        let id = contact.id;
        repo.push(contact);

        let removed = repo.remove(id).unwrap();
        assert_eq!(removed.name, "Gone");
        assert!(repo.is_empty());

        assert!(repo.remove(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_apply_patch_marks_dirty_only_on_change() {
        let (_temp_dir, mut repo) = create_test_repo();
        let contact = Contact::new("Ada", "5551234567");
        let id = contact.id;
        repo.push(contact);
        repo.save().unwrap();

        let same = ContactPatch::new()
            .with(Field::Name, "Ada")
            .with(Field::Phone, "5551234567");
        let (before, after) = repo.apply_patch(id, &same).unwrap();
        assert!(before.same_fields(&after));
        assert!(!repo.is_dirty());

        let patch = ContactPatch::new().with(Field::Phone, "5550000000");
        let (_, after) = repo.apply_patch(id, &patch).unwrap();
        assert_eq!(after.phone, "5550000000");
        assert!(repo.is_dirty());

        assert!(repo
            .apply_patch(ContactId::new(), &patch)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_extend_keeps_duplicates() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(Contact::new("Same", "5550000000"));
        repo.extend(vec![Contact::new("Same", "5550000000")]);
        assert_eq!(repo.count(), 2);
    }
}
