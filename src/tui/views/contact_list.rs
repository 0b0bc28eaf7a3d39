//! Contact list view
//!
//! The filter bar and the table of visible contacts

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Field;
use crate::tui::app::{App, InputMode};

/// Render the filter bar
pub fn render_filter(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Filter;
    let border_color = if editing { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(" Contact Book ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    app.filter.focused = editing;
    let paragraph = Paragraph::new(app.filter.spans()).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the contact table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = app.service.layout();
    let fields = layout.fields();

    let title = if app.visible.len() == app.service.count() {
        format!(" Contacts ({}) ", app.visible.len())
    } else {
        format!(
            " Contacts ({} of {}) ",
            app.visible.len(),
            app.service.count()
        )
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.visible.is_empty() {
        let empty = Paragraph::new("No contacts found. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut widths = vec![Constraint::Length(4)];
    widths.extend(fields.iter().map(|&field| column_width(field)));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut header_cells = vec![Cell::from("#").style(bold)];
    header_cells.extend(
        fields
            .iter()
            .map(|field| Cell::from(field.header()).style(bold)),
    );
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .enumerate()
        .map(|(i, contact)| {
            let mut cells = vec![Cell::from((i + 1).to_string())];
            cells.extend(
                fields
                    .iter()
                    .map(|&field| Cell::from(contact.get(field).to_string())),
            );
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn column_width(field: Field) -> Constraint {
    match field {
        Field::Name => Constraint::Length(22),
        Field::Phone => Constraint::Length(14),
        Field::Email => Constraint::Length(26),
        Field::Group => Constraint::Length(12),
        Field::Birthday => Constraint::Length(12),
        Field::Notes => Constraint::Min(10),
    }
}
