//! Audit logging for the contact book
//!
//! Records every create, update, delete and import with before/after values
//! in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(contact.id.to_string(), Some(contact.name.clone()), &contact))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
