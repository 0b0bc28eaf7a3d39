//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::services::validation::ValidationError;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A record was rejected by the add-time checks
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Text could not be read as the expected kind of value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A 1-based position outside the displayed list
    #[error("Invalid contact number: {position} (expected 1-{len})")]
    InvalidPosition { position: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for files
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: path.display().to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ContactError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ContactError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ContactError::contact_not_found("con-1234abcd");
        assert_eq!(err.to_string(), "Contact not found: con-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_position_error() {
        let err = ContactError::InvalidPosition {
            position: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "Invalid contact number: 7 (expected 1-3)");
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: ContactError = ValidationError::EmptyName.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Name cannot be empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContactError = io_err.into();
        assert!(matches!(err, ContactError::Io(_)));
    }
}
