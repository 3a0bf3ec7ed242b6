//! Validation Rules
//!
//! Limits shared by both form variants.

use serde::{Deserialize, Serialize};

/// Tunable limits for field validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum characters in a trimmed first or last name
    pub name_min_chars: usize,
    /// Exact digit count of a phone number
    pub phone_digits: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            phone_digits: 10,
        }
    }
}
