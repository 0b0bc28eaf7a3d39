//! Contact Book - a personal contact book for the terminal
//!
//! This library provides the core functionality for the contact book: a
//! store of name/phone/email records (plus optional group, birthday and
//! notes) persisted to a CSV file and managed through a numbered text menu,
//! a terminal form, or one-shot subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The contact record, field layouts and birthdays
//! - `storage`: CSV file storage layer
//! - `services`: Business logic layer (validation, CRUD, search, transfer)
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers
//! - `menu`: Numbered text menu
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{paths::ContactPaths, settings::Settings};
//! use contact_book::services::ContactService;
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//! let service = ContactService::new(&mut storage, &settings);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ContactError;
