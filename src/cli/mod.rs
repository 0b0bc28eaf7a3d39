//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod contact;

pub use contact::{handle_contact_command, ContactCommands};
