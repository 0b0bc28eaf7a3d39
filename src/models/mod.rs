//! Core data models for the contact book
//!
//! This module contains the record type, its field layouts, session IDs and
//! birthday parsing.

pub mod birthday;
pub mod contact;
pub mod ids;
pub mod layout;

pub use birthday::MonthDay;
pub use contact::{Contact, ContactPatch, NewContact};
pub use ids::ContactId;
pub use layout::{Field, ListOrder, RecordLayout};
