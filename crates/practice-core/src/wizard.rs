use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::{FieldKind, FieldValue};
use crate::gate::{FieldReport, FormGate, GateField};
use crate::validate::FORM_STATE_PASSWORD_MIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Account,
    Confirm,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Personal,
        WizardStep::Account,
        WizardStep::Confirm,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Account => 2,
            WizardStep::Confirm => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal details",
            WizardStep::Account => "Account",
            WizardStep::Confirm => "Confirm",
        }
    }

    pub fn fields(&self) -> Vec<GateField> {
        match self {
            WizardStep::Personal => vec![
                GateField::required("name", "Name", FieldKind::RequiredText),
                GateField::required("email", "Email", FieldKind::Email),
            ],
            WizardStep::Account => vec![
                GateField::required("username", "Username", FieldKind::RequiredText),
                GateField::required(
                    "password",
                    "Password",
                    FieldKind::Password {
                        min_len: FORM_STATE_PASSWORD_MIN,
                    },
                ),
            ],
            WizardStep::Confirm => vec![GateField::required(
                "terms",
                "Terms",
                FieldKind::RequiredCheckbox,
            )],
        }
    }

    fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => Some(WizardStep::Account),
            WizardStep::Account => Some(WizardStep::Confirm),
            WizardStep::Confirm => None,
        }
    }

    fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Account => Some(WizardStep::Personal),
            WizardStep::Confirm => Some(WizardStep::Account),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StepOutcome {
    Moved { step: WizardStep },
    /// The current step has invalid fields; the wizard stayed put.
    Blocked { failures: Vec<FieldReport> },
    Completed,
    /// The control is disabled at this position.
    Unavailable,
}

/// Multi-step form. Values survive moving back and forth between steps.
#[derive(Debug, Clone)]
pub struct Wizard {
    current: WizardStep,
    values: BTreeMap<String, FieldValue>,
    completed: bool,
    last_outcome: Option<StepOutcome>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Personal,
            values: BTreeMap::new(),
            completed: false,
            last_outcome: None,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        WizardStep::ALL.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn can_go_back(&self) -> bool {
        !self.completed && self.current.preceding().is_some()
    }

    pub fn can_go_next(&self) -> bool {
        !self.completed && self.current.following().is_some()
    }

    pub fn can_finish(&self) -> bool {
        !self.completed && self.current.following().is_none()
    }

    pub fn set_value(&mut self, field_id: &str, value: FieldValue) {
        self.values.insert(field_id.to_string(), value);
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn last_outcome(&self) -> Option<&StepOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn next(&mut self) -> StepOutcome {
        let outcome = match self.current.following() {
            Some(step) if !self.completed => match self.blocking_failures() {
                Some(failures) => StepOutcome::Blocked { failures },
                None => {
                    self.current = step;
                    StepOutcome::Moved { step }
                }
            },
            _ => StepOutcome::Unavailable,
        };
        self.record(outcome)
    }

    pub fn back(&mut self) -> StepOutcome {
        let outcome = match self.current.preceding() {
            Some(step) if !self.completed => {
                self.current = step;
                StepOutcome::Moved { step }
            }
            _ => StepOutcome::Unavailable,
        };
        self.record(outcome)
    }

    pub fn finish(&mut self) -> StepOutcome {
        let outcome = if !self.can_finish() {
            StepOutcome::Unavailable
        } else if let Some(failures) = self.blocking_failures() {
            StepOutcome::Blocked { failures }
        } else {
            self.completed = true;
            StepOutcome::Completed
        };
        self.record(outcome)
    }

    fn blocking_failures(&self) -> Option<Vec<FieldReport>> {
        let evaluation = FormGate::new(self.current.fields()).evaluate(&self.values);
        if evaluation.enabled {
            None
        } else {
            Some(evaluation.failures().cloned().collect())
        }
    }

    fn record(&mut self, outcome: StepOutcome) -> StepOutcome {
        debug!(step = self.current.number(), ?outcome, "wizard navigation");
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}
