//! TUI Views module
//!
//! The contact list with its filter bar, and the status bar.

pub mod contact_list;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    contact_list::render_filter(frame, app, layout.filter);
    contact_list::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::AddContact | ActiveDialog::EditContact(_) => {
            dialogs::contact::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmQuit => {
            let message = dialogs::confirm::message(app);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Import | ActiveDialog::Export => {
            dialogs::path::render(frame, app);
        }
        ActiveDialog::Message { title, body } => {
            dialogs::message::render(frame, title, body);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordLayout;
    use crate::services::ContactService;
    use crate::tui::app::tests::{create_storage, march_fifth};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_contacts_and_reminder() {
        let (_temp, mut storage, settings) = create_storage(RecordLayout::Full);
        let mut app = App::new(ContactService::new(&mut storage, &settings), march_fifth());
        app.show_birthday_reminder();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Contacts (3)"));
        assert!(text.contains("Bobby"));
        assert!(text.contains("Today's birthdays: Alice"));
    }
}
