//! Contact Entity
//!
//! Committed contacts and the parsed values they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{ContactDraft, Field};
use crate::error::{FieldError, FieldErrors};
use crate::validation::ValidationRules;

/// A first or last name that passed the name rules. Stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(field: Field, raw: &str, rules: &ValidationRules) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Required { field });
        }
        if trimmed.chars().count() < rules.name_min_chars {
            return Err(FieldError::TooShort { field, min: rules.name_min_chars });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
            return Err(FieldError::NotAlphabetic { field });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Caller guarantees `raw` already satisfies the name rules
    pub(crate) fn trusted(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digits-only phone number of the configured length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str, rules: &ValidationRules) -> Result<Self, FieldError> {
        let field = Field::PhoneNumber;
        if raw.trim().is_empty() {
            return Err(FieldError::Required { field });
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::NotDigits { field });
        }
        let actual = raw.len();
        if actual != rules.phone_digits {
            return Err(FieldError::WrongLength { field, expected: rules.phone_digits, actual });
        }
        Ok(Self(raw.to_string()))
    }

    pub(crate) fn trusted(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A draft whose every field passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone_number: PhoneNumber,
}

impl ValidContact {
    /// Parse every field, collecting all failures
    pub fn parse(draft: &ContactDraft, rules: &ValidationRules) -> Result<Self, FieldErrors> {
        let first = PersonName::parse(Field::FirstName, &draft.first_name, rules);
        let last = PersonName::parse(Field::LastName, &draft.last_name, rules);
        let phone = PhoneNumber::parse(&draft.phone_number, rules);

        match (first, last, phone) {
            (Ok(first_name), Ok(last_name), Ok(phone_number)) => Ok(Self {
                first_name,
                last_name,
                phone_number,
            }),
            (first, last, phone) => Err([first.err(), last.err(), phone.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    /// Build from a draft some other validator already accepted
    pub(crate) fn trusted(draft: &ContactDraft) -> Self {
        Self {
            first_name: PersonName::trusted(&draft.first_name),
            last_name: PersonName::trusted(&draft.last_name),
            phone_number: PhoneNumber::trusted(&draft.phone_number),
        }
    }
}

/// An accepted entry of the contact book. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(id: u32, valid: ValidContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: valid.first_name.0,
            last_name: valid.last_name.0,
            phone_number: valid.phone_number.0,
            created_at,
        }
    }

    /// Same person and number, ignoring name case and surrounding whitespace
    pub fn matches(&self, draft: &ContactDraft) -> bool {
        self.phone_number == draft.phone_number
            && eq_ignore_case(&self.last_name, &draft.last_name)
            && eq_ignore_case(&self.first_name, &draft.first_name)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ValidationRules {
        ValidationRules::default()
    }

    #[test]
    fn test_person_name_rules() {
        let f = Field::FirstName;
        assert_eq!(PersonName::parse(f, "   ", &rules()), Err(FieldError::Required { field: f }));
        assert_eq!(PersonName::parse(f, " A ", &rules()), Err(FieldError::TooShort { field: f, min: 2 }));
        assert_eq!(PersonName::parse(f, "Ann3", &rules()), Err(FieldError::NotAlphabetic { field: f }));
        assert_eq!(PersonName::parse(f, "O'Neil", &rules()), Err(FieldError::NotAlphabetic { field: f }));
        assert_eq!(PersonName::parse(f, " Mary Ann ", &rules()).unwrap().as_str(), "Mary Ann");
    }

    #[test]
    fn test_phone_number_rules() {
        let f = Field::PhoneNumber;
        assert_eq!(PhoneNumber::parse("", &rules()), Err(FieldError::Required { field: f }));
        assert_eq!(PhoneNumber::parse("555-1234", &rules()), Err(FieldError::NotDigits { field: f }));
        assert_eq!(
            PhoneNumber::parse("555123456", &rules()),
            Err(FieldError::WrongLength { field: f, expected: 10, actual: 9 })
        );
        assert_eq!(
            PhoneNumber::parse("55512345678", &rules()),
            Err(FieldError::WrongLength { field: f, expected: 10, actual: 11 })
        );
        assert_eq!(PhoneNumber::parse("5551234567", &rules()).unwrap().as_str(), "5551234567");
    }

    #[test]
    fn test_valid_contact_collects_every_failure() {
        let draft = ContactDraft::new("", "L", "12");
        let errors = ValidContact::parse(&draft, &rules()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors.get(Field::LastName), Some(FieldError::TooShort { .. })));
    }

    #[test]
    fn test_contact_matches_ignores_name_case() {
        let valid = ValidContact::parse(&ContactDraft::new("Ann", "Lee", "5551234567"), &rules()).unwrap();
        let contact = Contact::new(1, valid, Utc::now());

        assert!(contact.matches(&ContactDraft::new("ann", "LEE", "5551234567")));
        assert!(contact.matches(&ContactDraft::new("Ann ", "Lee", "555-123-4567")));
        assert!(!contact.matches(&ContactDraft::new("Ann", "Lee", "5551234568")));
        assert!(!contact.matches(&ContactDraft::new("Anne", "Lee", "5551234567")));
        assert_eq!(contact.id, 1);
        assert_eq!(contact.full_name(), "Ann Lee");
    }
}
