//! Contact/signup form validation.
//!
//! # Responsibility
//! - Validate required fields by input kind.
//! - Produce the per-field messages shown next to each input.
//!
//! # Invariants
//! - Optional fields are never validated.
//! - At most one error per field, in field order.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\+]?[1-9][0-9]{0,15}$").expect("valid phone regex"));
static PHONE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-\(\)]").expect("valid phone separator regex"));

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Input kind, matching the HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn required(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

/// Validates `fields`; an empty result means the form may be submitted.
pub fn validate_form(fields: &[FormField]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter_map(|field| {
            validate_field(field).map(|message| FieldError {
                field: field.name.clone(),
                message,
            })
        })
        .collect()
}

fn validate_field(field: &FormField) -> Option<&'static str> {
    if field.value.trim().is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Some(INVALID_EMAIL_MESSAGE),
        FieldKind::Tel if !is_valid_phone(&field.value) => Some(INVALID_PHONE_MESSAGE),
        _ => None,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Accepts an optional `+`, a non-zero leading digit and up to 16 digits;
/// spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let compact = PHONE_SEPARATOR_RE.replace_all(value, "");
    PHONE_RE.is_match(&compact)
}
