use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{FieldError, FieldKind, FieldValue, ValidationResult};

/// Minimum password length on the login page.
pub const LOGIN_PASSWORD_MIN: usize = 6;
/// Minimum password length on the form-state page.
pub const FORM_STATE_PASSWORD_MIN: usize = 8;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

pub fn validate(kind: FieldKind, value: &FieldValue) -> ValidationResult {
    match (kind, value) {
        (FieldKind::Email, FieldValue::Text(text)) => check_email(text),
        (FieldKind::Password { min_len }, FieldValue::Text(text)) => check_password(text, min_len),
        (FieldKind::RequiredText, FieldValue::Text(text)) => check_required_text(text),
        (FieldKind::RequiredCheckbox, FieldValue::Checked(checked)) => check_checkbox(*checked),
        _ => ValidationResult::fail(FieldError::InvalidFormat),
    }
}

/// `local@domain.tld` with no whitespace and non-empty domain labels.
pub fn check_email(raw: &str) -> ValidationResult {
    let email = raw.trim();
    if email.is_empty() {
        return ValidationResult::fail(FieldError::Required);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return ValidationResult::fail(FieldError::InvalidFormat);
    }
    ValidationResult::ok()
}

/// Length is measured in characters, and exactly `min_len` passes.
pub fn check_password(raw: &str, min_len: usize) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::fail(FieldError::Required);
    }
    if raw.chars().count() < min_len {
        return ValidationResult::fail(FieldError::TooShort { min_len });
    }
    ValidationResult::ok()
}

pub fn check_required_text(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        ValidationResult::fail(FieldError::Required)
    } else {
        ValidationResult::ok()
    }
}

pub fn check_checkbox(checked: bool) -> ValidationResult {
    if checked {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(FieldError::Required)
    }
}
