//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts for the subcommands and the
//! text menu.

pub mod contact;

pub use contact::{
    format_birthday_reminder, format_contact_details, format_contact_line, format_contact_lines,
    format_contact_table,
};
