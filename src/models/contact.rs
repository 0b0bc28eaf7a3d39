//! Contact model
//!
//! A contact is a fixed record: name and phone are always present, the rest
//! are optional and stored as `None` when blank.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::MonthDay;
use super::ids::ContactId;
use super::layout::{Field, RecordLayout};

/// One contact entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Session identifier; never persisted
    #[serde(skip, default)]
    pub id: ContactId,

    pub name: String,

    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Free-form date text; see [`MonthDay::parse`] for accepted shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Contact {
    /// Create a contact with only the required fields
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            group: None,
            birthday: None,
            notes: None,
        }
    }

    /// Builder-style setter for any field
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Read a field as text; absent optional fields read as ""
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => self.email.as_deref().unwrap_or(""),
            Field::Group => self.group.as_deref().unwrap_or(""),
            Field::Birthday => self.birthday.as_deref().unwrap_or(""),
            Field::Notes => self.notes.as_deref().unwrap_or(""),
        }
    }

    /// Overwrite a field; an empty value clears an optional field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = non_empty(value),
            Field::Group => self.group = non_empty(value),
            Field::Birthday => self.birthday = non_empty(value),
            Field::Notes => self.notes = non_empty(value),
        }
    }

    /// Compare every field except the session ID
    pub fn same_fields(&self, other: &Contact) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.group == other.group
            && self.birthday == other.birthday
            && self.notes == other.notes
    }

    /// Drop any fields the layout does not carry
    pub fn restrict_to(&mut self, layout: RecordLayout) {
        for field in [Field::Email, Field::Group, Field::Birthday, Field::Notes] {
            if !layout.has(field) {
                self.set(field, "");
            }
        }
    }

    /// Apply a patch, returning true if anything changed
    pub fn apply(&mut self, patch: &ContactPatch) -> bool {
        let mut changed = false;
        for (field, value) in patch.values() {
            if self.get(field) != value {
                self.set(field, value);
                changed = true;
            }
        }
        changed
    }

    /// Case-insensitive substring match over the given fields
    pub fn matches(&self, query: &str, fields: &[Field]) -> bool {
        let query = query.to_lowercase();
        fields
            .iter()
            .any(|&field| self.get(field).to_lowercase().contains(&query))
    }

    /// The birthday's month and day, if it parses
    pub fn birthday_month_day(&self) -> Option<MonthDay> {
        self.birthday.as_deref().and_then(MonthDay::parse)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Phone: {}, Email: {}",
            self.name,
            self.phone,
            self.get(Field::Email)
        )
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// User-supplied values for a new contact, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub group: String,
    pub birthday: String,
    pub notes: String,
}

impl NewContact {
    /// Start from the required fields
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for any field
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Group => self.group = value,
            Field::Birthday => self.birthday = value,
            Field::Notes => self.notes = value,
        }
        self
    }

    /// Build a contact carrying only the layout's fields
    pub fn into_contact(self, layout: RecordLayout) -> Contact {
        let mut contact = Contact::new(self.name, self.phone)
            .with(Field::Email, self.email)
            .with(Field::Group, self.group)
            .with(Field::Birthday, self.birthday)
            .with(Field::Notes, self.notes);
        contact.restrict_to(layout);
        contact
    }
}

/// Replacement values for an update
///
/// Only fields with a non-blank value are replaced; everything else is left
/// as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    values: Vec<(Field, String)>,
}

impl ContactPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replacement value; blank values are ignored
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.values.retain(|(f, _)| *f != field);
        self.values.push((field, value.to_string()));
    }

    /// Builder-style variant of [`ContactPatch::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Build a patch from optional values (as CLI flags arrive)
    pub fn from_options<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Field, Option<String>)>,
    {
        let mut patch = Self::new();
        for (field, value) in values {
            if let Some(value) = value {
                patch.set(field, value);
            }
        }
        patch
    }

    /// Iterate the replacement values
    pub fn values(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new("Ada Lovelace", "5551234567")
            .with(Field::Email, "ada@example.com")
            .with(Field::Group, "Family")
            .with(Field::Notes, "Likes engines")
    }

    #[test]
    fn test_empty_optional_is_none() {
        let contact = Contact::new("Bob", "5550000000").with(Field::Email, "");
        assert_eq!(contact.email, None);
        assert_eq!(contact.get(Field::Email), "");
    }

    #[test]
    fn test_patch_only_replaces_supplied_fields() {
        let mut contact = sample();
        let before = contact.clone();

        let patch = ContactPatch::new()
            .with(Field::Phone, "5559876543")
            .with(Field::Name, "   ");
        assert!(contact.apply(&patch));

        assert_eq!(contact.phone, "5559876543");
        assert_eq!(contact.name, before.name);
        assert_eq!(contact.email, before.email);
        assert_eq!(contact.group, before.group);
        assert_eq!(contact.notes, before.notes);
    }

    #[test]
    fn test_patch_with_same_value_reports_unchanged() {
        let mut contact = sample();
        let patch = ContactPatch::new().with(Field::Name, "Ada Lovelace");
        assert!(!contact.apply(&patch));
    }

    #[test]
    fn test_patch_from_options() {
        let patch = ContactPatch::from_options([
            (Field::Name, None),
            (Field::Email, Some("new@example.com".to_string())),
            (Field::Notes, Some(String::new())),
        ]);
        let values: Vec<_> = patch.values().collect();
        assert_eq!(values, vec![(Field::Email, "new@example.com")]);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let contact = sample();
        assert!(contact.matches("LOVE", &[Field::Name]));
        assert!(contact.matches("fam", &[Field::Name, Field::Group]));
        assert!(!contact.matches("fam", &[Field::Name]));
        assert!(!contact.matches("engines", &[Field::Name, Field::Group, Field::Email]));
    }

    #[test]
    fn test_new_contact_respects_layout() {
        let contact = NewContact::new("Eve", "5551112222")
            .with(Field::Group, "Work")
            .with(Field::Birthday, "03-05")
            .into_contact(RecordLayout::Basic);
        assert_eq!(contact.group, None);
        assert_eq!(contact.birthday, None);

        let full = NewContact::new("Eve", "5551112222")
            .with(Field::Birthday, "03-05")
            .into_contact(RecordLayout::Full);
        assert_eq!(full.birthday.as_deref(), Some("03-05"));
    }

    #[test]
    fn test_same_fields_ignores_id() {
        let a = sample();
        let mut b = a.clone();
        b.id = ContactId::new();
        assert!(a.same_fields(&b));
        assert_ne!(a, b);
    }
}
