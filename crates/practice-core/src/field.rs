use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw value captured from a single form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Checked(_) => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// Whitespace-only text and unchecked boxes count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

/// Kinds of field the predicate set knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Password { min_len: usize },
    RequiredText,
    RequiredCheckbox,
}

impl FieldKind {
    /// Value a control of this kind holds before the user touches it.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::RequiredCheckbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Reason a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("invalid format")]
    InvalidFormat,
    #[error("must be at least {min_len} characters")]
    TooShort { min_len: usize },
}

impl FieldError {
    /// Sentence shown inline next to the control labelled `label`.
    pub fn describe(&self, label: &str) -> String {
        match self {
            FieldError::Required => format!("{label} is required"),
            FieldError::InvalidFormat => format!("{label} has an invalid format"),
            FieldError::TooShort { min_len } => {
                format!("{label} must be at least {min_len} characters")
            }
        }
    }
}

/// Outcome of classifying one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FieldError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: FieldError) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}
