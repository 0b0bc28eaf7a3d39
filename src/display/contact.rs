//! Contact display formatting
//!
//! Formats contacts for terminal output as numbered tables, menu lines and
//! detail views. Numbers shown here are the 1-based positions users type back.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{Contact, Field, RecordLayout};

/// Format contacts as a numbered table with the layout's columns
pub fn format_contact_table(contacts: &[Contact], layout: RecordLayout) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut builder = Builder::default();

    let mut header = vec!["#".to_string()];
    header.extend(layout.fields().iter().map(|f| f.header().to_string()));
    builder.push_record(header);

    for (i, contact) in contacts.iter().enumerate() {
        let mut row = vec![(i + 1).to_string()];
        row.extend(
            layout
                .fields()
                .iter()
                .map(|&field| truncate(contact.get(field), 40)),
        );
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// One numbered line per contact, as the text menu prints them
pub fn format_contact_lines(contacts: &[Contact], layout: RecordLayout) -> String {
    contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| format!("{}. {}", i + 1, format_contact_line(contact, layout)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single-line summary with every non-empty field past the name
pub fn format_contact_line(contact: &Contact, layout: RecordLayout) -> String {
    let mut line = contact.name.clone();
    for &field in layout.fields().iter().skip(1) {
        let value = contact.get(field);
        if field == Field::Phone || field == Field::Email || !value.is_empty() {
            line.push_str(&format!(", {}: {}", field, value));
        }
    }
    line
}

/// Multi-line detail view of one contact
pub fn format_contact_details(contact: &Contact, layout: RecordLayout) -> String {
    let width = layout
        .fields()
        .iter()
        .map(|f| f.header().len())
        .max()
        .unwrap_or(4);

    let mut output = String::new();
    for &field in layout.fields() {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            format!("{}:", field),
            contact.get(field),
            width = width + 1
        ));
    }
    output
}

/// The startup reminder for today's birthdays, if any
pub fn format_birthday_reminder(contacts: &[Contact]) -> Option<String> {
    if contacts.is_empty() {
        return None;
    }

    let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
    Some(format!("Today's birthdays: {}", names.join(", ")))
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
