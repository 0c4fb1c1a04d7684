use practice_core::{
    FieldError, FieldKind, FieldValue, LOGIN_PASSWORD_MIN, check_email, check_password, validate,
};

#[test]
fn email_requires_a_value() {
    let result = check_email("   ");
    assert!(!result.valid);
    assert_eq!(result.reason, Some(FieldError::Required));
}

#[test]
fn email_shape_is_enforced() {
    for raw in [
        "plainaddress",
        "missing-at.example.com",
        "user@nodot",
        "user@.com",
        "user@domain.",
        "user@@example.com",
        "us er@example.com",
    ] {
        let result = check_email(raw);
        assert!(!result.valid, "{raw} should be rejected");
        assert_eq!(result.reason, Some(FieldError::InvalidFormat), "{raw}");
    }
}

#[test]
fn well_formed_emails_pass() {
    for raw in [
        "tester@example.com",
        "first.last@sub.example.org",
        " padded@example.com ",
    ] {
        assert!(check_email(raw).valid, "{raw} should be accepted");
    }
}

#[test]
fn password_boundary_is_inclusive() {
    assert!(check_password("abcdef", LOGIN_PASSWORD_MIN).valid);
    let short = check_password("abcde", LOGIN_PASSWORD_MIN);
    assert_eq!(short.reason, Some(FieldError::TooShort { min_len: 6 }));
    assert_eq!(
        check_password("", LOGIN_PASSWORD_MIN).reason,
        Some(FieldError::Required)
    );
}

#[test]
fn password_minimum_is_a_parameter() {
    assert!(check_password("1234567", 6).valid);
    assert!(!check_password("1234567", 8).valid);
    assert!(check_password("12345678", 8).valid);
}

#[test]
fn password_length_counts_characters() {
    assert!(check_password("ééééé", 6).reason.is_some());
    assert!(check_password("éééééé", 6).valid);
}

#[test]
fn checkbox_must_be_checked() {
    assert!(validate(FieldKind::RequiredCheckbox, &FieldValue::Checked(true)).valid);
    let unchecked = validate(FieldKind::RequiredCheckbox, &FieldValue::Checked(false));
    assert_eq!(unchecked.reason, Some(FieldError::Required));
}

#[test]
fn mismatched_value_type_is_invalid_format() {
    let result = validate(FieldKind::Email, &FieldValue::Checked(true));
    assert_eq!(result.reason, Some(FieldError::InvalidFormat));
    let result = validate(FieldKind::RequiredCheckbox, &FieldValue::text("yes"));
    assert_eq!(result.reason, Some(FieldError::InvalidFormat));
}

#[test]
fn reasons_render_human_sentences() {
    assert_eq!(FieldError::Required.to_string(), "required");
    assert_eq!(FieldError::InvalidFormat.to_string(), "invalid format");
    assert_eq!(
        FieldError::TooShort { min_len: 8 }.to_string(),
        "must be at least 8 characters"
    );
    assert_eq!(
        FieldError::TooShort { min_len: 6 }.describe("Password"),
        "Password must be at least 6 characters"
    );
}

#[test]
fn validation_result_serializes_reason_code() {
    let result = check_password("abc", 6);
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["valid"], false);
    assert_eq!(json["reason"]["code"], "too_short");
    assert_eq!(json["reason"]["min_len"], 6);
}
