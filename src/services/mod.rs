//! Service layer for the contact book
//!
//! The service layer holds the business rules (validation, position
//! resolution, search scope, import/export) on top of the storage layer.

pub mod contact;
pub mod validation;

pub use contact::{parse_position, ContactService, ContactView};
pub use validation::{validate, ValidationError};
