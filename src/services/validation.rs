//! Add-time shape checks for contacts
//!
//! Validation only runs when a contact is added. Updates and imports are
//! taken as given.

use std::sync::OnceLock;

use regex_lite::Regex;
use thiserror::Error;

use crate::models::{NewContact, RecordLayout};

/// Why a contact was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Phone number must be exactly 10 digits (got '{0}')")]
    InvalidPhone(String),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
}

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("valid phone regex"))
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
    })
}

/// Exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Empty, or a minimal `text@text.text` shape
pub fn is_valid_email(email: &str) -> bool {
    email.is_empty() || email_regex().is_match(email)
}

/// Check name, phone and email, reporting the first failure
pub fn validate(name: &str, phone: &str, email: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Apply the checks a layout calls for
///
/// The basic layout only requires a name.
pub fn validate_new(contact: &NewContact, layout: RecordLayout) -> Result<(), ValidationError> {
    if layout.validates_format() {
        validate(&contact.name, &contact.phone, &contact.email)
    } else if contact.name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("55512345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email(""));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn test_validate_reports_reason() {
        assert_eq!(
            validate("", "5551234567", ""),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate("Ada", "12345", ""),
            Err(ValidationError::InvalidPhone("12345".into()))
        );
        assert_eq!(
            validate("Ada", "5551234567", "nope"),
            Err(ValidationError::InvalidEmail("nope".into()))
        );
        assert_eq!(validate("Ada", "5551234567", "ada@example.com"), Ok(()));
    }

    #[test]
    fn test_basic_layout_only_checks_name() {
        let loose = NewContact::new("Ada", "not a phone");
        assert_eq!(validate_new(&loose, RecordLayout::Basic), Ok(()));
        assert!(validate_new(&loose, RecordLayout::Full).is_err());

        let unnamed = NewContact::new("  ", "5551234567");
        assert_eq!(
            validate_new(&unnamed, RecordLayout::Basic),
            Err(ValidationError::EmptyName)
        );
    }
}
