//! Terminal User Interface module
//!
//! A ratatui form over the contact book: a filterable contact list, an
//! add/edit dialog, delete and quit confirmations, import/export path
//! dialogs and the birthday reminder.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
