//! Confirmation dialog
//!
//! Yes/no confirmation for deleting a contact and for quitting with
//! unsaved changes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;

/// The question the active confirmation asks
pub fn message(app: &App) -> String {
    match app.active_dialog {
        ActiveDialog::ConfirmDelete(id) => match app.service.get(id) {
            Some(contact) => format!("Delete contact '{}'?", contact.name),
            None => "Delete this contact?".to_string(),
        },
        ActiveDialog::ConfirmQuit => "Quit and discard unsaved changes?".to_string(),
        _ => String::new(),
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input for a confirmation
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let dialog = std::mem::take(&mut app.active_dialog);
            match dialog {
                ActiveDialog::ConfirmDelete(id) => match app.service.delete(id) {
                    Ok(removed) => {
                        app.refresh();
                        app.set_status(format!("Deleted '{}' (unsaved)", removed.name));
                        app.check_audit();
                    }
                    Err(e) => app.set_status(format!("Delete failed: {}", e)),
                },
                ActiveDialog::ConfirmQuit => app.quit(),
                _ => {}
            }
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            true
        }
        _ => false,
    }
}
