//! Page Configuration
//!
//! Validation limits can be overridden from the host page with
//! `<meta name="contact-form-rules" content='{"phoneDigits": 10}'>`.

use leptos::prelude::*;

use contact_book::ValidationRules;

pub const RULES_META: &str = "contact-form-rules";

/// Parse the meta tag content, falling back to defaults on absence or bad JSON
pub fn parse_rules(content: Option<&str>) -> ValidationRules {
    match content {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed {} meta tag: {}", RULES_META, err);
            ValidationRules::default()
        }),
        None => ValidationRules::default(),
    }
}

/// Read validation limits from the current document
pub fn load_rules() -> ValidationRules {
    let selector = format!("meta[name=\"{}\"]", RULES_META);
    let content = document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    parse_rules(content.as_deref())
}
