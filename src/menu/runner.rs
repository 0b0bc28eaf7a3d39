//! The numbered text menu
//!
//! One loop iteration reads a choice, runs one operation against the
//! [`ContactService`] and reports the result. Operation errors are printed
//! and the loop continues; only end of input or an explicit exit ends it.

use std::path::Path;

use chrono::NaiveDate;

use crate::display::{format_birthday_reminder, format_contact_lines};
use crate::error::ContactResult;
use crate::export::ExportFormat;
use crate::models::{Contact, ContactId, ContactPatch, NewContact, RecordLayout};
use crate::services::{parse_position, ContactService, ContactView};

use super::prompter::Prompter;

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    List,
    Add,
    Search,
    Update,
    Delete,
    Import,
    Export,
    Birthdays,
    Save,
    SaveAndExit,
    Quit,
}

impl MenuAction {
    /// The key the user types to pick this entry
    pub fn key(&self) -> &'static str {
        match self {
            Self::List => "1",
            Self::Add => "2",
            Self::Search => "3",
            Self::Update => "4",
            Self::Delete => "5",
            Self::Import => "6",
            Self::Export => "7",
            Self::Birthdays => "8",
            Self::Save => "S",
            Self::SaveAndExit => "X",
            Self::Quit => "Q",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "List contacts",
            Self::Add => "Add contact",
            Self::Search => "Search contacts",
            Self::Update => "Update contact",
            Self::Delete => "Delete contact",
            Self::Import => "Import contacts",
            Self::Export => "Export contacts",
            Self::Birthdays => "Today's birthdays",
            Self::Save => "Save",
            Self::SaveAndExit => "Save and exit",
            Self::Quit => "Quit without saving",
        }
    }

    /// Entries offered for a layout, in menu order
    pub fn for_layout(layout: RecordLayout) -> Vec<MenuAction> {
        let mut actions = vec![
            Self::List,
            Self::Add,
            Self::Search,
            Self::Update,
            Self::Delete,
        ];
        if layout.supports_transfer() {
            actions.extend([Self::Import, Self::Export]);
        }
        if layout.supports_birthdays() {
            actions.push(Self::Birthdays);
        }
        actions.extend([Self::Save, Self::SaveAndExit, Self::Quit]);
        actions
    }

    /// Match typed input against the layout's entries (letters in any case)
    pub fn parse(input: &str, layout: RecordLayout) -> Option<MenuAction> {
        let input = input.trim();
        Self::for_layout(layout)
            .into_iter()
            .find(|action| action.key().eq_ignore_ascii_case(input))
    }
}

/// How the menu session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The store was saved on the way out
    Saved,
    /// The session ended without saving
    Discarded,
}

/// Startup behaviour of the menu
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    /// Print today's birthdays before the first prompt
    pub birthday_reminder: bool,
    /// The date birthdays are compared against
    pub today: NaiveDate,
}

enum Flow {
    Continue,
    Exit(MenuOutcome),
}

/// Run the menu until the user exits or input ends
pub fn run_menu<P: Prompter>(
    service: &mut ContactService<'_>,
    prompter: &mut P,
    options: MenuOptions,
) -> MenuOutcome {
    let mut session = MenuSession {
        service,
        prompter,
        today: options.today,
        view: ContactView::default(),
    };
    session.run(options.birthday_reminder)
}

struct MenuSession<'s, 'a, P> {
    service: &'s mut ContactService<'a>,
    prompter: &'s mut P,
    today: NaiveDate,
    /// The contacts most recently printed; positions resolve against it
    view: ContactView,
}

impl<P: Prompter> MenuSession<'_, '_, P> {
    fn run(&mut self, birthday_reminder: bool) -> MenuOutcome {
        let layout = self.service.layout();

        if birthday_reminder && layout.supports_birthdays() {
            let matches = self.service.birthdays_on(self.today);
            if let Some(reminder) = format_birthday_reminder(&matches) {
                self.prompter.say(&reminder);
            }
        }

        loop {
            self.show_menu(layout);

            let Some(choice) = self.prompter.ask("Enter your choice: ") else {
                self.prompter.say("Exiting without saving.");
                return MenuOutcome::Discarded;
            };

            let Some(action) = MenuAction::parse(&choice, layout) else {
                self.prompter.say("Invalid choice.");
                continue;
            };

            let flow = match self.dispatch(action) {
                Ok(flow) => flow,
                Err(e) => {
                    self.prompter.say(&format!("Error: {}", e));
                    Flow::Continue
                }
            };

            if let Some(warning) = self.service.take_audit_warning() {
                self.prompter
                    .say(&format!("Warning: audit log not written: {}", warning));
            }

            if let Flow::Exit(outcome) = flow {
                return outcome;
            }
        }
    }

    fn show_menu(&mut self, layout: RecordLayout) {
        self.prompter.say("");
        self.prompter.say("Contact Book");
        for action in MenuAction::for_layout(layout) {
            self.prompter
                .say(&format!("{}. {}", action.key(), action.label()));
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> ContactResult<Flow> {
        match action {
            MenuAction::List => {
                let contacts = self.service.list();
                self.show_contacts(&contacts, "No contacts available.");
            }
            MenuAction::Add => self.add()?,
            MenuAction::Search => {
                if let Some(query) = self.prompter.ask("Search: ") {
                    let results = self.service.search(&query);
                    self.show_contacts(&results, "No contacts found.");
                }
            }
            MenuAction::Update => self.update()?,
            MenuAction::Delete => self.delete()?,
            MenuAction::Import => self.import()?,
            MenuAction::Export => self.export()?,
            MenuAction::Birthdays => {
                let matches = self.service.birthdays_on(self.today);
                let message = format_birthday_reminder(&matches)
                    .unwrap_or_else(|| "No birthdays today.".to_string());
                self.prompter.say(&message);
            }
            MenuAction::Save => {
                self.service.save()?;
                self.prompter.say("Contacts saved.");
            }
            MenuAction::SaveAndExit => {
                self.service.save()?;
                self.prompter.say("Contacts saved. Goodbye!");
                return Ok(Flow::Exit(MenuOutcome::Saved));
            }
            MenuAction::Quit => {
                if self.confirm_discard() {
                    return Ok(Flow::Exit(MenuOutcome::Discarded));
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Print a numbered list and remember it for later positions
    fn show_contacts(&mut self, contacts: &[Contact], empty_message: &str) {
        self.view = ContactView::from_contacts(contacts);
        if contacts.is_empty() {
            self.prompter.say(empty_message);
        } else {
            let lines = format_contact_lines(contacts, self.service.layout());
            self.prompter.say(&lines);
        }
    }

    fn add(&mut self) -> ContactResult<()> {
        let mut new_contact = NewContact::default();
        for &field in self.service.layout().fields() {
            let Some(value) = self.prompter.ask(&format!("{}: ", field)) else {
                return Ok(());
            };
            new_contact = new_contact.with(field, value);
        }

        let contact = self.service.add(new_contact)?;
        self.prompter.say(&format!("Added contact: {}", contact.name));
        Ok(())
    }

    fn update(&mut self) -> ContactResult<()> {
        let Some(id) = self.choose_contact("update")? else {
            return Ok(());
        };
        let Some(current) = self.service.get(id).cloned() else {
            return Ok(());
        };

        let mut patch = ContactPatch::new();
        for &field in self.service.layout().fields() {
            let prompt = format!("New {} [{}]: ", field, current.get(field));
            let Some(value) = self.prompter.ask(&prompt) else {
                return Ok(());
            };
            patch.set(field, value);
        }

        if patch.is_empty() {
            self.prompter.say("No changes made.");
            return Ok(());
        }

        let updated = self.service.update(id, &patch)?;
        self.prompter
            .say(&format!("Updated contact: {}", updated.name));
        Ok(())
    }

    fn delete(&mut self) -> ContactResult<()> {
        let Some(id) = self.choose_contact("delete")? else {
            return Ok(());
        };

        let removed = self.service.delete(id)?;
        self.view = ContactView::default();
        self.prompter
            .say(&format!("Deleted contact: {}", removed.name));
        Ok(())
    }

    /// Search, show the matches, then resolve a typed position
    fn choose_contact(&mut self, verb: &str) -> ContactResult<Option<ContactId>> {
        let Some(query) = self.prompter.ask("Search (blank for all): ") else {
            return Ok(None);
        };

        let matches = if query.is_empty() {
            self.service.list()
        } else {
            self.service.search(&query)
        };
        self.show_contacts(&matches, "No contacts found.");
        if matches.is_empty() {
            return Ok(None);
        }

        let prompt = format!("Enter the number of the contact to {}: ", verb);
        let Some(answer) = self.prompter.ask(&prompt) else {
            return Ok(None);
        };
        let position = parse_position(&answer)?;
        self.view.resolve(position).map(Some)
    }

    fn import(&mut self) -> ContactResult<()> {
        let Some(path) = self.ask_path("Import from file: ") else {
            return Ok(());
        };

        let count = self.service.import(Path::new(&path))?;
        self.prompter
            .say(&format!("Imported {} contacts from {}.", count, path));
        Ok(())
    }

    fn export(&mut self) -> ContactResult<()> {
        let Some(path) = self.ask_path("Export to file: ") else {
            return Ok(());
        };

        let path = Path::new(&path);
        let format = ExportFormat::from_path(path);
        let count = self.service.export(path, format)?;
        self.prompter.say(&format!(
            "Exported {} contacts to {}.",
            count,
            path.display()
        ));
        Ok(())
    }

    fn ask_path(&mut self, prompt: &str) -> Option<String> {
        self.prompter.ask(prompt).filter(|path| !path.is_empty())
    }

    fn confirm_discard(&mut self) -> bool {
        if !self.service.has_unsaved_changes() {
            return true;
        }
        self.prompter
            .ask("Discard unsaved changes? [y/N]: ")
            .map(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
            .unwrap_or(true)
    }
}
