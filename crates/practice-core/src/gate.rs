use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::{FieldKind, FieldValue, ValidationResult};
use crate::validate::{FORM_STATE_PASSWORD_MIN, validate};

/// One control participating in a gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GateField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl GateField {
    pub fn required(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: true,
        }
    }

    pub fn optional(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(id, label, kind)
        }
    }
}

/// Validation outcome for a single gate field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldReport {
    pub id: String,
    pub label: String,
    pub result: ValidationResult,
}

impl FieldReport {
    pub fn message(&self) -> Option<String> {
        self.result
            .reason
            .as_ref()
            .map(|reason| reason.describe(&self.label))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GateEvaluation {
    pub enabled: bool,
    pub reports: Vec<FieldReport>,
}

impl GateEvaluation {
    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.reports.iter().filter(|report| !report.result.valid)
    }
}

/// Logical AND over the validation of a fixed set of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormGate {
    fields: Vec<GateField>,
}

impl FormGate {
    pub fn new(fields: Vec<GateField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[GateField] {
        &self.fields
    }

    /// Fields missing from `values` are evaluated as untouched controls.
    pub fn evaluate(&self, values: &BTreeMap<String, FieldValue>) -> GateEvaluation {
        let reports = self
            .fields
            .iter()
            .map(|field| {
                let empty = field.kind.empty_value();
                let value = values.get(&field.id).unwrap_or(&empty);
                let result = if !field.required && value.is_blank() {
                    ValidationResult::ok()
                } else {
                    validate(field.kind, value)
                };
                FieldReport {
                    id: field.id.clone(),
                    label: field.label.clone(),
                    result,
                }
            })
            .collect::<Vec<_>>();
        let enabled = reports.iter().all(|report| report.result.valid);
        debug!(fields = reports.len(), enabled, "gate evaluated");
        GateEvaluation { enabled, reports }
    }

    pub fn can_submit(&self, values: &BTreeMap<String, FieldValue>) -> bool {
        self.evaluate(values).enabled
    }
}

pub const FORM_EMAIL: &str = "email";
pub const FORM_PASSWORD: &str = "password";
pub const FORM_TERMS: &str = "terms";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormStateOutcome {
    /// The submit control was disabled; nothing happened.
    Disabled,
    Submitted,
}

/// Hard-gated registration form: submit is enabled only while every field passes.
#[derive(Debug, Clone)]
pub struct FormState {
    gate: FormGate,
    values: BTreeMap<String, FieldValue>,
    submit_enabled: bool,
    outcome: Option<FormStateOutcome>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let gate = FormGate::new(vec![
            GateField::required(FORM_EMAIL, "Email", FieldKind::Email),
            GateField::required(
                FORM_PASSWORD,
                "Password",
                FieldKind::Password {
                    min_len: FORM_STATE_PASSWORD_MIN,
                },
            ),
            GateField::required(FORM_TERMS, "Terms", FieldKind::RequiredCheckbox),
        ]);
        let values = BTreeMap::new();
        let submit_enabled = gate.can_submit(&values);
        Self {
            gate,
            values,
            submit_enabled,
            outcome: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        self.set(FORM_EMAIL, FieldValue::Text(email.into()))
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> bool {
        self.set(FORM_PASSWORD, FieldValue::Text(password.into()))
    }

    pub fn set_terms(&mut self, checked: bool) -> bool {
        self.set(FORM_TERMS, FieldValue::Checked(checked))
    }

    /// Stores the value and recomputes the submit state, returning it.
    pub fn set(&mut self, field_id: &str, value: FieldValue) -> bool {
        self.values.insert(field_id.to_string(), value);
        self.submit_enabled = self.gate.can_submit(&self.values);
        self.outcome = None;
        self.submit_enabled
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn evaluation(&self) -> GateEvaluation {
        self.gate.evaluate(&self.values)
    }

    pub fn submit(&mut self) -> FormStateOutcome {
        let outcome = if self.submit_enabled {
            FormStateOutcome::Submitted
        } else {
            FormStateOutcome::Disabled
        };
        self.outcome = Some(outcome);
        outcome
    }

    pub fn outcome(&self) -> Option<FormStateOutcome> {
        self.outcome
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }
}
