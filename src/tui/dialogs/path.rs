//! Import/export path dialog
//!
//! Asks for a file path, then runs the import or export against it.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::export::ExportFormat;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the path dialog
#[derive(Debug, Clone, Default)]
pub struct PathInputState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl PathInputState {
    pub fn new(label: &str) -> Self {
        let mut input = TextInput::new()
            .label(label)
            .placeholder("contacts-copy.csv");
        input.focused = true;
        Self {
            input,
            error_message: None,
        }
    }

    /// The typed path, if any
    pub fn path(&self) -> Option<PathBuf> {
        let value = self.input.value().trim();
        if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        }
    }
}

/// Render the path dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(64, 7, frame.area());
    frame.render_widget(Clear, area);

    let title = match app.active_dialog {
        ActiveDialog::Export => " Export Contacts ",
        _ => " Import Contacts ",
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&app.path_input.input, chunks[0]);

    if let Some(ref error) = app.path_input.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" OK  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Handle key input for the path dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            if let Err(e) = run_transfer(app) {
                app.path_input.error_message = Some(e);
            }
            true
        }
        code => {
            app.path_input.error_message = None;
            app.path_input.input.handle_key(code)
        }
    }
}

fn run_transfer(app: &mut App) -> Result<(), String> {
    let path = app
        .path_input
        .path()
        .ok_or_else(|| "Enter a file path".to_string())?;

    let message = if app.active_dialog == ActiveDialog::Export {
        let count = app
            .service
            .export(&path, ExportFormat::from_path(&path))
            .map_err(|e| e.to_string())?;
        format!("Exported {} contacts to {}", count, path.display())
    } else {
        let count = app.service.import(&path).map_err(|e| e.to_string())?;
        app.refresh();
        format!("Imported {} contacts (unsaved)", count)
    };

    app.close_dialog();
    app.set_status(message);
    app.check_audit();
    Ok(())
}
