use std::collections::BTreeMap;

use practice_core::{
    FieldError, FieldKind, FieldValue, FormGate, FormState, FormStateOutcome, GateField,
};

fn values(pairs: &[(&str, FieldValue)]) -> BTreeMap<String, FieldValue> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn form_state_starts_disabled() {
    let form = FormState::new();
    assert!(!form.submit_enabled());
}

#[test]
fn form_state_enables_only_when_every_field_passes() {
    let mut form = FormState::new();
    assert!(!form.set_email("tester@example.com"));
    assert!(!form.set_password("longenough"));
    assert!(form.set_terms(true));

    assert!(!form.set_password("short"));
    assert!(form.set_password("12345678"));

    assert!(!form.set_terms(false));
    assert!(form.set_terms(true));

    assert!(!form.set_email("not-an-email"));
}

#[test]
fn form_state_recompute_is_idempotent() {
    let mut form = FormState::new();
    form.set_email("tester@example.com");
    form.set_password("password123");
    let first = form.set_terms(true);
    let second = form.set_terms(true);
    assert_eq!(first, second);
    assert_eq!(form.evaluation(), form.evaluation());
}

#[test]
fn disabled_submit_does_nothing() {
    let mut form = FormState::new();
    form.set_email("tester@example.com");
    assert_eq!(form.submit(), FormStateOutcome::Disabled);

    form.set_password("password123");
    form.set_terms(true);
    assert_eq!(form.submit(), FormStateOutcome::Submitted);
    assert_eq!(form.outcome(), Some(FormStateOutcome::Submitted));

    form.set_terms(false);
    assert_eq!(form.outcome(), None);
}

#[test]
fn empty_optional_fields_never_fail() {
    let gate = FormGate::new(vec![
        GateField::required("email", "Email", FieldKind::Email),
        GateField::optional("backup", "Backup email", FieldKind::Email),
    ]);

    let filled = values(&[("email", FieldValue::text("a@b.co"))]);
    assert!(gate.can_submit(&filled));

    let blank_optional = values(&[
        ("email", FieldValue::text("a@b.co")),
        ("backup", FieldValue::text("  ")),
    ]);
    assert!(gate.can_submit(&blank_optional));

    let bad_optional = values(&[
        ("email", FieldValue::text("a@b.co")),
        ("backup", FieldValue::text("nope")),
    ]);
    let evaluation = gate.evaluate(&bad_optional);
    assert!(!evaluation.enabled);
    let failure = evaluation.failures().next().expect("backup fails");
    assert_eq!(failure.id, "backup");
    assert_eq!(failure.result.reason, Some(FieldError::InvalidFormat));
}

#[test]
fn missing_required_values_are_treated_as_untouched() {
    let gate = FormGate::new(vec![
        GateField::required("name", "Name", FieldKind::RequiredText),
        GateField::required("terms", "Terms", FieldKind::RequiredCheckbox),
    ]);
    let evaluation = gate.evaluate(&BTreeMap::new());
    assert!(!evaluation.enabled);
    let messages = evaluation
        .failures()
        .filter_map(|report| report.message())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["Name is required", "Terms is required"]);
}
