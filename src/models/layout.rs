//! Record layouts
//!
//! A layout fixes which fields a contact carries, the column order of the
//! persistence file, which fields a search scans, and whether adds are
//! shape-checked.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A named contact field, in persistence column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Group,
    Birthday,
    Notes,
}

impl Field {
    /// Column header used in the persistence file
    pub fn header(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Group => "Group",
            Field::Birthday => "Birthday",
            Field::Notes => "Notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Which field set the contact book works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// Name, phone and email
    Basic,
    /// Adds group and notes, with phone/email shape checks
    Validated,
    /// Adds birthday and the birthday reminder
    #[default]
    Full,
}

const BASIC_FIELDS: &[Field] = &[Field::Name, Field::Phone, Field::Email];
const VALIDATED_FIELDS: &[Field] = &[
    Field::Name,
    Field::Phone,
    Field::Email,
    Field::Group,
    Field::Notes,
];
const FULL_FIELDS: &[Field] = &[
    Field::Name,
    Field::Phone,
    Field::Email,
    Field::Group,
    Field::Birthday,
    Field::Notes,
];

impl RecordLayout {
    /// Fields in persistence column order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            RecordLayout::Basic => BASIC_FIELDS,
            RecordLayout::Validated => VALIDATED_FIELDS,
            RecordLayout::Full => FULL_FIELDS,
        }
    }

    /// Header row written to the persistence file
    pub fn headers(&self) -> Vec<&'static str> {
        self.fields().iter().map(Field::header).collect()
    }

    /// Whether this layout carries the given field
    pub fn has(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Fields a search query is matched against
    pub fn search_fields(&self) -> &'static [Field] {
        match self {
            RecordLayout::Basic => &[Field::Name],
            RecordLayout::Validated => &[Field::Name, Field::Group, Field::Email],
            RecordLayout::Full => &[Field::Name, Field::Group, Field::Email, Field::Birthday],
        }
    }

    /// Whether adds check phone and email shapes
    pub fn validates_format(&self) -> bool {
        !matches!(self, RecordLayout::Basic)
    }

    /// Whether import and export are offered
    pub fn supports_transfer(&self) -> bool {
        !matches!(self, RecordLayout::Basic)
    }

    /// Whether the birthday reminder is offered
    pub fn supports_birthdays(&self) -> bool {
        self.has(Field::Birthday)
    }

    /// Ordering used by list output unless overridden
    pub fn default_list_order(&self) -> ListOrder {
        match self {
            RecordLayout::Validated => ListOrder::Name,
            _ => ListOrder::Store,
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLayout::Basic => write!(f, "basic"),
            RecordLayout::Validated => write!(f, "validated"),
            RecordLayout::Full => write!(f, "full"),
        }
    }
}

/// Ordering of list output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Order records were loaded or added
    Store,
    /// Stable ascending sort by name (case-sensitive)
    Name,
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListOrder::Store => write!(f, "store"),
            ListOrder::Name => write!(f, "name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_per_layout() {
        assert_eq!(RecordLayout::Basic.headers(), vec!["Name", "Phone", "Email"]);
        assert_eq!(
            RecordLayout::Validated.headers(),
            vec!["Name", "Phone", "Email", "Group", "Notes"]
        );
        assert_eq!(
            RecordLayout::Full.headers(),
            vec!["Name", "Phone", "Email", "Group", "Birthday", "Notes"]
        );
    }

    #[test]
    fn test_capabilities() {
        assert!(!RecordLayout::Basic.validates_format());
        assert!(!RecordLayout::Basic.supports_transfer());
        assert!(RecordLayout::Validated.supports_transfer());
        assert!(!RecordLayout::Validated.supports_birthdays());
        assert!(RecordLayout::Full.supports_birthdays());
    }

    #[test]
    fn test_search_fields() {
        assert_eq!(RecordLayout::Basic.search_fields(), &[Field::Name]);
        assert!(RecordLayout::Full.search_fields().contains(&Field::Birthday));
        assert!(!RecordLayout::Full.search_fields().contains(&Field::Notes));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RecordLayout::Validated).unwrap();
        assert_eq!(json, "\"validated\"");
        let order: ListOrder = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(order, ListOrder::Name);
    }
}
