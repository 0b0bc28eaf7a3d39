//! Configuration module for the contact book
//!
//! This module provides configuration management including:
//! - Config directory and contacts file resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactPaths;
pub use settings::Settings;
