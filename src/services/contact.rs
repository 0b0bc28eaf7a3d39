//! Contact service
//!
//! Business logic for the contact book: add, update, delete, search, list,
//! import, export and the birthday reminder. Every surface (subcommands, the
//! text menu, the TUI) goes through this service.

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{ContactError, ContactResult};
use crate::export::{export_to_path, ExportFormat};
use crate::models::{
    Contact, ContactId, ContactPatch, ListOrder, MonthDay, NewContact, RecordLayout,
};
use crate::storage::{read_contacts_required, Storage};

use super::validation::validate_new;

/// The contacts most recently shown to the user, by ID
///
/// Positions typed by the user are resolved against this view, so a position
/// taken from a filtered search always names the record that was displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    ids: Vec<ContactId>,
}

impl ContactView {
    /// Capture the order of a displayed list
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        Self {
            ids: contacts.iter().map(|c| c.id).collect(),
        }
    }

    /// Map a 1-based position to a contact ID
    pub fn resolve(&self, position: usize) -> ContactResult<ContactId> {
        position
            .checked_sub(1)
            .and_then(|index| self.ids.get(index))
            .copied()
            .ok_or(ContactError::InvalidPosition {
                position,
                len: self.ids.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Parse a user-typed 1-based position
pub fn parse_position(text: &str) -> ContactResult<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ContactError::InvalidInput(format!("'{}' is not a number", text.trim())))
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
    list_order: ListOrder,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a mut Storage, settings: &Settings) -> Self {
        let list_order = settings
            .list_order
            .unwrap_or_else(|| storage.layout().default_list_order());
        Self {
            storage,
            list_order,
        }
    }

    /// Field layout of the underlying store
    pub fn layout(&self) -> RecordLayout {
        self.storage.layout()
    }

    /// Whether the store has unsaved changes
    pub fn has_unsaved_changes(&self) -> bool {
        self.storage.contacts.is_dirty()
    }

    /// Number of contacts in the store
    pub fn count(&self) -> usize {
        self.storage.contacts.count()
    }

    /// Get a contact by ID
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.storage.contacts.get(id)
    }

    /// Take the first audit failure since the last call
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.storage.take_audit_warning()
    }

    /// Validate and append a new contact
    pub fn add(&mut self, new_contact: NewContact) -> ContactResult<Contact> {
        let layout = self.layout();
        validate_new(&new_contact, layout)?;

        let contact = new_contact.into_contact(layout);
        self.storage.contacts.push(contact.clone());
        self.storage.log_create(&contact);

        Ok(contact)
    }

    /// Replace the supplied fields of a contact
    ///
    /// Updates are not re-validated.
    pub fn update(&mut self, id: ContactId, patch: &ContactPatch) -> ContactResult<Contact> {
        let (before, after) = self.storage.contacts.apply_patch(id, patch)?;

        if !before.same_fields(&after) {
            self.storage.log_update(&before, &after);
        }

        Ok(after)
    }

    /// Remove a contact
    pub fn delete(&mut self, id: ContactId) -> ContactResult<Contact> {
        let removed = self.storage.contacts.remove(id)?;
        self.storage.log_delete(&removed);
        Ok(removed)
    }

    /// All contacts in display order
    pub fn list(&self) -> Vec<Contact> {
        let mut contacts = self.storage.contacts.all().to_vec();
        if self.list_order == ListOrder::Name {
            contacts.sort_by(|a, b| a.name.cmp(&b.name));
        }
        contacts
    }

    /// Case-insensitive substring search over the layout's search fields
    ///
    /// Results keep store order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let fields = self.layout().search_fields();
        self.storage
            .contacts
            .all()
            .iter()
            .filter(|c| c.matches(query, fields))
            .cloned()
            .collect()
    }

    /// Append every record from another contacts file
    ///
    /// Records are taken verbatim: no validation and no de-duplication.
    pub fn import(&mut self, path: &Path) -> ContactResult<usize> {
        self.ensure_transfer("Import")?;

        let imported = read_contacts_required(path, self.layout()).map_err(|e| match e {
            ContactError::NotFound { .. } => e,
            other => ContactError::Import(other.to_string()),
        })?;
        let count = imported.len();

        self.storage.contacts.extend(imported);
        self.storage.log_import(path, count);

        Ok(count)
    }

    /// Write the current store to another file
    pub fn export(&self, path: &Path, format: ExportFormat) -> ContactResult<usize> {
        self.ensure_transfer("Export")?;

        let contacts = self.storage.contacts.all();
        export_to_path(path, format, self.layout(), contacts)?;
        Ok(contacts.len())
    }

    /// Overwrite the contacts file with the current store
    pub fn save(&mut self) -> ContactResult<()> {
        self.storage.save_all()
    }

    /// Contacts whose birthday falls on the given date's month and day
    pub fn birthdays_on(&self, date: NaiveDate) -> Vec<Contact> {
        if !self.layout().supports_birthdays() {
            return Vec::new();
        }

        let today = MonthDay::from_date(date);
        self.storage
            .contacts
            .all()
            .iter()
            .filter(|c| c.birthday_month_day() == Some(today))
            .cloned()
            .collect()
    }

    /// Contacts with a birthday today (local time)
    pub fn birthdays_today(&self) -> Vec<Contact> {
        self.birthdays_on(Local::now().date_naive())
    }

    fn ensure_transfer(&self, action: &str) -> ContactResult<()> {
        if self.layout().supports_transfer() {
            Ok(())
        } else {
            Err(ContactError::Config(format!(
                "{} is not available with the {} layout",
                action,
                self.layout()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ContactPaths;
    use crate::models::Field;
    use std::fs;
    use tempfile::TempDir;

    fn create_storage(layout: RecordLayout) -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_config_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            layout,
            ..Settings::default()
        };
        let mut storage = Storage::new(paths, &settings).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, settings)
    }

    fn ada() -> NewContact {
        NewContact::new("Ada Lovelace", "5551234567")
            .with(Field::Email, "ada@example.com")
            .with(Field::Group, "Family")
            .with(Field::Notes, "Analyst")
    }

    #[test]
    fn test_add_appends_to_end() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);

        service.add(NewContact::new("First", "5550000001")).unwrap();
        let second = service.add(NewContact::new("Second", "5550000002")).unwrap();

        let list = service.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, second.id);
        assert!(service.has_unsaved_changes());
    }

    #[test]
    fn test_add_with_empty_name_is_rejected() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Basic);
        let mut service = ContactService::new(&mut storage, &settings);

        let err = service.add(NewContact::new("", "5551234567")).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_add_with_bad_phone_is_rejected_when_validating() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Validated);
        let mut service = ContactService::new(&mut storage, &settings);

        assert!(service
            .add(NewContact::new("Ada", "555-123-4567"))
            .unwrap_err()
            .is_validation());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_add_save_load_round_trip() {
        let (temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let added = {
            let mut service = ContactService::new(&mut storage, &settings);
            service.add(NewContact::new("Bob", "5550000000")).unwrap();
            let added = service
                .add(ada().with(Field::Birthday, "1815-12-10"))
                .unwrap();
            service.save().unwrap();
            added
        };

        let paths = ContactPaths::with_config_dir(temp.path().to_path_buf());
        let mut reloaded = Storage::new(paths, &settings).unwrap();
        reloaded.load_all().unwrap();

        let last = reloaded.contacts.all().last().unwrap();
        assert!(last.same_fields(&added));
    }

    #[test]
    fn test_update_only_changes_supplied_fields() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Validated);
        let mut service = ContactService::new(&mut storage, &settings);
        let original = service.add(ada()).unwrap();

        let view = ContactView::from_contacts(&service.list());
        let id = view.resolve(1).unwrap();
        let patch = ContactPatch::new().with(Field::Phone, "5559876543");
        let updated = service.update(id, &patch).unwrap();

        assert_eq!(updated.phone, "5559876543");
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.email, original.email);
        assert_eq!(updated.group, original.group);
        assert_eq!(updated.notes, original.notes);
    }

    #[test]
    fn test_update_is_not_revalidated() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        let contact = service.add(ada()).unwrap();

        let patch = ContactPatch::new().with(Field::Phone, "not digits");
        let updated = service.update(contact.id, &patch).unwrap();
        assert_eq!(updated.phone, "not digits");
    }

    #[test]
    fn test_update_with_current_values_is_not_a_change() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        {
            let mut service = ContactService::new(&mut storage, &settings);
            service.add(ada()).unwrap();
            service.save().unwrap();
        }
        let mut service = ContactService::new(&mut storage, &settings);
        let contact = service.list().remove(0);

        let patch = ContactPatch::new()
            .with(Field::Name, "Ada Lovelace")
            .with(Field::Phone, "5551234567")
            .with(Field::Email, "ada@example.com");
        service.update(contact.id, &patch).unwrap();
        assert!(!service.has_unsaved_changes());

        let patch = ContactPatch::new().with(Field::Notes, "Engine");
        service.update(contact.id, &patch).unwrap();
        assert!(service.has_unsaved_changes());
    }

    #[test]
    fn test_delete_out_of_bounds_leaves_store_unchanged() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service.add(ada()).unwrap();
        let before = service.list();

        let view = ContactView::from_contacts(&before);
        let err = view.resolve(5).unwrap_err();
        assert!(matches!(
            err,
            ContactError::InvalidPosition {
                position: 5,
                len: 1
            }
        ));
        assert!(view.resolve(0).is_err());

        assert_eq!(service.list(), before);
    }

    #[test]
    fn test_delete_from_filtered_view_targets_displayed_record() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service.add(NewContact::new("Alice", "5550000001")).unwrap();
        service.add(NewContact::new("Bob", "5550000002")).unwrap();
        service.add(NewContact::new("Bobby", "5550000003")).unwrap();

        let results = service.search("bobby");
        let view = ContactView::from_contacts(&results);
        let removed = service.delete(view.resolve(1).unwrap()).unwrap();

        assert_eq!(removed.name, "Bobby");
        let names: Vec<_> = service.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service.add(ada()).unwrap();
        let before = service.list();

        assert!(service.search("zzz-nothing").is_empty());
        assert_eq!(service.list(), before);
    }

    #[test]
    fn test_search_fields_follow_layout() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service.add(ada()).unwrap();

        assert_eq!(service.search("FAMILY").len(), 1);
        assert_eq!(service.search("example.com").len(), 1);
        assert!(service.search("Analyst").is_empty());
    }

    #[test]
    fn test_validated_layout_lists_by_name() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Validated);
        let mut service = ContactService::new(&mut storage, &settings);
        for name in ["carol", "Bob", "alice", "Bob"] {
            service.add(NewContact::new(name, "5550000000")).unwrap();
        }

        let names: Vec<_> = service.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bob", "Bob", "alice", "carol"]);

        let searched: Vec<_> = service.search("").into_iter().map(|c| c.name).collect();
        assert_eq!(searched, vec!["carol", "Bob", "alice", "Bob"]);
    }

    #[test]
    fn test_import_appends_without_validation() {
        let (temp, mut storage, settings) = create_storage(RecordLayout::Validated);
        let source = temp.path().join("friends.csv");
        fs::write(
            &source,
            "Name,Phone,Email,Group,Notes\nAda,5551234567,,,\n,bad phone,not-an-email,,\n",
        )
        .unwrap();

        let mut service = ContactService::new(&mut storage, &settings);
        service.add(NewContact::new("Ada", "5551234567")).unwrap();

        assert_eq!(service.import(&source).unwrap(), 2);
        assert_eq!(service.count(), 3);

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.last().unwrap().operation, Operation::Import);
    }

    #[test]
    fn test_import_missing_file_is_reported() {
        let (temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);

        let err = service.import(&temp.path().join("nope.csv")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_transfer_unavailable_in_basic_layout() {
        let (temp, mut storage, settings) = create_storage(RecordLayout::Basic);
        let service = ContactService::new(&mut storage, &settings);

        let err = service
            .export(&temp.path().join("out.csv"), ExportFormat::Csv)
            .unwrap_err();
        assert!(matches!(err, ContactError::Config(_)));
    }

    #[test]
    fn test_export_does_not_touch_store() {
        let (temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service.add(ada()).unwrap();
        service.save().unwrap();

        let out = temp.path().join("export.csv");
        assert_eq!(service.export(&out, ExportFormat::Csv).unwrap(), 1);
        assert!(!service.has_unsaved_changes());

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Name,Phone,Email,Group,Birthday,Notes\n"));
        assert!(text.contains("Ada Lovelace"));
    }

    #[test]
    fn test_birthday_matches_regardless_of_year() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut service = ContactService::new(&mut storage, &settings);
        service
            .add(ada().with(Field::Birthday, "2024-03-05"))
            .unwrap();
        service
            .add(NewContact::new("Bob", "5550000000").with(Field::Birthday, "someday"))
            .unwrap();
        service.add(NewContact::new("Carol", "5550000001")).unwrap();

        let march_fifth = NaiveDate::from_ymd_opt(2031, 3, 5).unwrap();
        let matches = service.birthdays_on(march_fifth);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Ada Lovelace");

        let other_day = NaiveDate::from_ymd_opt(2031, 3, 6).unwrap();
        assert!(service.birthdays_on(other_day).is_empty());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 3 ").unwrap(), 3);
        assert!(matches!(
            parse_position("three"),
            Err(ContactError::InvalidInput(_))
        ));
        assert!(parse_position("-1").is_err());
    }
}
