//! Dialog modules for the TUI
//!
//! Contains modal dialogs for contact entry, confirmation and file transfer

pub mod confirm;
pub mod contact;
pub mod help;
pub mod message;
pub mod path;
