//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Filter => handle_filter_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    let layout = app.service.layout();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.visible.len().saturating_sub(1);
        }

        KeyCode::Char('/') => {
            app.input_mode = InputMode::Filter;
        }
        KeyCode::Esc => {
            app.filter.clear();
            app.refresh();
            app.clear_status();
        }

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddContact),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_contact().map(|c| c.id) {
                app.open_dialog(ActiveDialog::EditContact(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_contact().map(|c| c.id) {
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
        }

        KeyCode::Char('i') if layout.supports_transfer() => {
            app.open_dialog(ActiveDialog::Import);
        }
        KeyCode::Char('x') if layout.supports_transfer() => {
            app.open_dialog(ActiveDialog::Export);
        }
        KeyCode::Char('b') if layout.supports_birthdays() => {
            app.show_birthday_reminder();
            if !app.has_dialog() {
                app.set_status("No birthdays today");
            }
        }

        KeyCode::Char('s') => app.save(),

        _ => {}
    }
}

/// Handle keys while typing in the filter bar
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => {
            app.input_mode = InputMode::Normal;
        }
        code => {
            if app.filter.handle_key(code) {
                app.selected_index = 0;
                app.refresh();
            }
        }
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddContact | ActiveDialog::EditContact(_) => {
            dialogs::contact::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmQuit => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::Import | ActiveDialog::Export => {
            dialogs::path::handle_key(app, key);
        }
        ActiveDialog::Help | ActiveDialog::Message { .. } => app.close_dialog(),
        ActiveDialog::None => {}
    }
}
