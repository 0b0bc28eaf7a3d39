//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use chrono::NaiveDate;

use crate::display::format_birthday_reminder;
use crate::models::{Contact, ContactId};
use crate::services::ContactService;

use super::dialogs::contact::ContactFormState;
use super::dialogs::path::PathInputState;
use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the filter bar
    Filter,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddContact,
    EditContact(ContactId),
    ConfirmDelete(ContactId),
    ConfirmQuit,
    Import,
    Export,
    /// A read-only message, such as the birthday reminder
    Message { title: String, body: String },
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The contact service over the session's store
    pub service: ContactService<'a>,

    /// Date used for the birthday reminder
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Filter text for the list
    pub filter: TextInput,

    /// Contacts currently shown, in display order
    pub visible: Vec<Contact>,

    /// Selected row in `visible`
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add/edit form state
    pub contact_form: ContactFormState,

    /// Import/export path state
    pub path_input: PathInputState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(service: ContactService<'a>, today: NaiveDate) -> Self {
        let layout = service.layout();
        let mut app = Self {
            service,
            today,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            filter: TextInput::new()
                .label("Filter")
                .placeholder("press / to search"),
            visible: Vec::new(),
            selected_index: 0,
            status_message: None,
            contact_form: ContactFormState::new(layout),
            path_input: PathInputState::default(),
        };
        app.refresh();
        app
    }

    /// Open the birthday reminder if anyone's birthday is today
    pub fn show_birthday_reminder(&mut self) {
        let matches = self.service.birthdays_on(self.today);
        if let Some(body) = format_birthday_reminder(&matches) {
            self.active_dialog = ActiveDialog::Message {
                title: "Birthdays".to_string(),
                body,
            };
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit, asking first when there are unsaved changes
    pub fn request_quit(&mut self) {
        if self.service.has_unsaved_changes() {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        } else {
            self.quit();
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the visible list from the store and the filter
    pub fn refresh(&mut self) {
        let query = self.filter.value().trim();
        self.visible = if query.is_empty() {
            self.service.list()
        } else {
            self.service.search(query)
        };

        if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len().saturating_sub(1);
        }
    }

    /// The contact under the cursor
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.visible.get(self.selected_index)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index < self.visible.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        let layout = self.service.layout();
        match &dialog {
            ActiveDialog::AddContact => {
                self.contact_form = ContactFormState::new(layout);
            }
            ActiveDialog::EditContact(id) => {
                if let Some(contact) = self.service.get(*id) {
                    self.contact_form = ContactFormState::from_contact(contact, layout);
                }
            }
            ActiveDialog::Import => {
                self.path_input = PathInputState::new("Import from");
            }
            ActiveDialog::Export => {
                self.path_input = PathInputState::new("Export to");
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Write the store to disk
    pub fn save(&mut self) {
        match self.service.save() {
            Ok(()) => self.set_status(format!("Saved {} contacts", self.service.count())),
            Err(e) => self.set_status(format!("Save failed: {}", e)),
        }
    }

    /// Surface an audit write failure, if one happened
    pub fn check_audit(&mut self) {
        if let Some(warning) = self.service.take_audit_warning() {
            self.set_status(format!("Audit log not written: {}", warning));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::config::settings::Settings;
    use crate::models::{Field, NewContact, RecordLayout};
    use crate::storage::Storage;
    use tempfile::TempDir;

    pub(crate) fn create_storage(layout: RecordLayout) -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_config_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            layout,
            ..Settings::default()
        };
        let mut storage = Storage::new(paths, &settings).unwrap();
        storage.load_all().unwrap();

        {
            let mut service = ContactService::new(&mut storage, &settings);
            service
                .add(NewContact::new("Alice", "5550000001").with(Field::Birthday, "1990-03-05"))
                .unwrap();
            service.add(NewContact::new("Bob", "5550000002")).unwrap();
            service.add(NewContact::new("Bobby", "5550000003")).unwrap();
            service.save().unwrap();
        }

        (temp_dir, storage, settings)
    }

    pub(crate) fn march_fifth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, 5).unwrap()
    }

    #[test]
    fn test_refresh_applies_filter() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut app = App::new(ContactService::new(&mut storage, &settings), march_fifth());
        assert_eq!(app.visible.len(), 3);

        app.selected_index = 2;
        app.filter = app.filter.clone().content("bob");
        app.refresh();

        assert_eq!(app.visible.len(), 2);
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_contact().unwrap().name, "Bobby");
    }

    #[test]
    fn test_selection_is_bounded() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut app = App::new(ContactService::new(&mut storage, &settings), march_fifth());

        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..5 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_birthday_reminder_dialog() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut app = App::new(ContactService::new(&mut storage, &settings), march_fifth());

        app.show_birthday_reminder();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Message {
                title: "Birthdays".to_string(),
                body: "Today's birthdays: Alice".to_string(),
            }
        );
    }

    #[test]
    fn test_quit_without_changes_is_immediate() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut app = App::new(ContactService::new(&mut storage, &settings), march_fifth());

        app.request_quit();
        assert!(app.should_quit);
    }
}
