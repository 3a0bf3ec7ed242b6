//! Declarative Field Schema
//!
//! Each field carries an ordered list of rules. The first rule that fails
//! becomes the field's error, mirroring how form validation libraries
//! resolve a schema.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldValidator, ValidationRules};
use crate::domain::Field;
use crate::error::FieldError;

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Failed to compile name regex"));

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

/// Which error a pattern mismatch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    LettersAndSpaces,
    Digits,
}

impl PatternKind {
    fn regex(&self) -> &'static Regex {
        match self {
            PatternKind::LettersAndSpaces => &LETTERS_AND_SPACES,
            PatternKind::Digits => &DIGITS_ONLY,
        }
    }

    fn error(&self, field: Field) -> FieldError {
        match self {
            PatternKind::LettersAndSpaces => FieldError::NotAlphabetic { field },
            PatternKind::Digits => FieldError::NotDigits { field },
        }
    }
}

/// One constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming
    Required,
    /// At least this many characters
    MinChars(usize),
    /// Whole value matches the pattern
    Matches(PatternKind),
    /// Exactly this many characters
    ExactLen(usize),
}

impl Rule {
    fn apply(&self, field: Field, value: &str) -> Result<(), FieldError> {
        match *self {
            Rule::Required if value.trim().is_empty() => Err(FieldError::Required { field }),
            Rule::MinChars(min) if value.chars().count() < min => {
                Err(FieldError::TooShort { field, min })
            }
            Rule::Matches(kind) if !kind.regex().is_match(value) => Err(kind.error(field)),
            Rule::ExactLen(expected) => {
                let actual = value.chars().count();
                if actual == expected {
                    Ok(())
                } else {
                    Err(FieldError::WrongLength { field, expected, actual })
                }
            }
            _ => Ok(()),
        }
    }
}

/// Rules for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub field: Field,
    /// Rules see the trimmed value
    pub trim: bool,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(field: Field) -> Self {
        Self { field, trim: false, rules: Vec::new() }
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let value = if self.trim { value.trim() } else { value };
        self.rules.iter().try_for_each(|rule| rule.apply(self.field, value))
    }
}

/// Schema for the whole contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// The contact form's schema for the given limits
    pub fn contact(rules: &ValidationRules) -> Self {
        let name = |field| {
            FieldSchema::new(field)
                .trimmed()
                .rule(Rule::Required)
                .rule(Rule::MinChars(rules.name_min_chars))
                .rule(Rule::Matches(PatternKind::LettersAndSpaces))
        };

        Self::new(vec![
            name(Field::FirstName),
            name(Field::LastName),
            FieldSchema::new(Field::PhoneNumber)
                .rule(Rule::Required)
                .rule(Rule::Matches(PatternKind::Digits))
                .rule(Rule::ExactLen(rules.phone_digits)),
        ])
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, field: Field) -> Option<&FieldSchema> {
        self.fields.iter().find(|s| s.field == field)
    }
}

impl FieldValidator for Schema {
    fn check(&self, field: Field, value: &str) -> Result<(), FieldError> {
        match self.field(field) {
            Some(schema) => schema.check(value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactDraft;

    fn schema() -> Schema {
        Schema::contact(&ValidationRules::default())
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let s = schema();
        assert_eq!(
            s.check(Field::LastName, "  "),
            Err(FieldError::Required { field: Field::LastName })
        );
        // Too short and non-alphabetic: length is checked first
        assert_eq!(
            s.check(Field::LastName, "7"),
            Err(FieldError::TooShort { field: Field::LastName, min: 2 })
        );
        assert_eq!(
            s.check(Field::LastName, "Lee7"),
            Err(FieldError::NotAlphabetic { field: Field::LastName })
        );
        assert_eq!(s.check(Field::LastName, " Van Dyke "), Ok(()));
    }

    #[test]
    fn test_phone_rules() {
        let s = schema();
        assert_eq!(
            s.check(Field::PhoneNumber, "555 123"),
            Err(FieldError::NotDigits { field: Field::PhoneNumber })
        );
        assert_eq!(
            s.check(Field::PhoneNumber, "555123"),
            Err(FieldError::WrongLength { field: Field::PhoneNumber, expected: 10, actual: 6 })
        );
        assert_eq!(s.check(Field::PhoneNumber, "5551234567"), Ok(()));
    }

    #[test]
    fn test_custom_schema() {
        let s = Schema::new(vec![FieldSchema::new(Field::FirstName).rule(Rule::MinChars(4))]);
        assert!(s.check(Field::FirstName, "Ann").is_err());
        // Fields without a schema are unconstrained
        assert_eq!(s.check(Field::PhoneNumber, ""), Ok(()));
        assert_eq!(s.validate(&ContactDraft::new("Anna", "", "")).len(), 0);
    }

    #[test]
    fn test_rules_follow_config() {
        let s = Schema::contact(&ValidationRules { name_min_chars: 3, phone_digits: 7 });
        assert!(s.check(Field::FirstName, "Al").is_err());
        assert_eq!(s.check(Field::PhoneNumber, "5551234"), Ok(()));
    }
}
