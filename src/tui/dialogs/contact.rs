//! Contact entry dialog
//!
//! Modal form for adding a contact or editing the selected one. Shows one
//! input per field of the active layout.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Contact, ContactId, ContactPatch, Field, NewContact, RecordLayout};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the contact form dialog
#[derive(Debug, Clone)]
pub struct ContactFormState {
    /// One input per layout field, in column order
    pub inputs: Vec<(Field, TextInput)>,

    /// Index of the focused input
    pub focused: usize,

    /// Contact being edited; `None` when adding
    pub editing: Option<ContactId>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl ContactFormState {
    /// Empty form for a new contact
    pub fn new(layout: RecordLayout) -> Self {
        let inputs = layout
            .fields()
            .iter()
            .map(|&field| {
                let input = TextInput::new()
                    .label(field.header())
                    .placeholder(placeholder(field, layout));
                (field, input)
            })
            .collect();

        let mut form = Self {
            inputs,
            focused: 0,
            editing: None,
            error_message: None,
        };
        form.sync_focus();
        form
    }

    /// Form pre-filled from an existing contact
    pub fn from_contact(contact: &Contact, layout: RecordLayout) -> Self {
        let mut form = Self::new(layout);
        for (field, input) in &mut form.inputs {
            *input = input.clone().content(contact.get(*field));
        }
        form.editing = Some(contact.id);
        form
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len().max(1);
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        let len = self.inputs.len().max(1);
        self.focused = (self.focused + len - 1) % len;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for (i, (_, input)) in self.inputs.iter_mut().enumerate() {
            input.focused = i == self.focused;
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.focused).map(|(_, input)| input)
    }

    /// Current text of a field
    pub fn value(&self, field: Field) -> &str {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input.value().trim())
            .unwrap_or("")
    }

    /// Values for a new contact
    pub fn build_new(&self) -> NewContact {
        self.inputs
            .iter()
            .fold(NewContact::default(), |contact, (field, input)| {
                contact.with(*field, input.value().trim())
            })
    }

    /// Replacement values for the contact being edited
    ///
    /// Blank inputs keep the stored value.
    pub fn build_patch(&self) -> ContactPatch {
        let mut patch = ContactPatch::new();
        for (field, input) in &self.inputs {
            patch.set(*field, input.value());
        }
        patch
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

fn placeholder(field: Field, layout: RecordLayout) -> &'static str {
    match field {
        Field::Name => "required",
        Field::Phone if layout.validates_format() => "10 digits",
        Field::Phone => "required",
        Field::Email => "optional",
        Field::Birthday => "YYYY-MM-DD, DD-MM-YYYY or MM-DD",
        Field::Group | Field::Notes => "optional",
    }
}

/// Render the contact dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let form = &app.contact_form;
    let height = form.inputs.len() as u16 + 6;
    let area = centered_rect_fixed(64, height, frame.area());

    frame.render_widget(Clear, area);

    let title = if form.editing.is_some() {
        " Edit Contact "
    } else {
        " Add Contact "
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

    let mut constraints: Vec<Constraint> =
        form.inputs.iter().map(|_| Constraint::Length(1)).collect();
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Hints
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (_, input)) in form.inputs.iter().enumerate() {
        frame.render_widget(input, chunks[i]);
    }

    let n = form.inputs.len();
    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[n + 1]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[n + 2]);
}

/// Handle key input for the contact dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            if let Err(e) = save_contact(app) {
                app.contact_form.set_error(e);
            }
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            app.contact_form.focus_next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact_form.focus_prev();
            true
        }
        code => {
            let form = &mut app.contact_form;
            form.clear_error();
            form.focused_input_mut()
                .map(|input| input.handle_key(code))
                .unwrap_or(false)
        }
    }
}

/// Add or update the contact from the form
fn save_contact(app: &mut App) -> Result<(), String> {
    let form = &app.contact_form;

    let (saved, status) = match form.editing {
        Some(id) => {
            let patch = form.build_patch();
            let unchanged = app.service.get(id).cloned();
            let updated = app.service.update(id, &patch).map_err(|e| e.to_string())?;
            let status = match unchanged {
                Some(before) if before.same_fields(&updated) => {
                    format!("Contact '{}' unchanged", updated.name)
                }
                _ => format!("Contact '{}' updated (unsaved)", updated.name),
            };
            (updated, status)
        }
        None => {
            let new_contact = form.build_new();
            let added = app.service.add(new_contact).map_err(|e| e.to_string())?;
            let status = format!("Contact '{}' added (unsaved)", added.name);
            (added, status)
        }
    };

    app.close_dialog();
    app.refresh();
    if let Some(index) = app.visible.iter().position(|c| c.id == saved.id) {
        app.selected_index = index;
    }
    app.set_status(status);
    app.check_audit();

    Ok(())
}
