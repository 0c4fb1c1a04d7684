use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn login_with_valid_credentials_succeeds() {
    cargo_bin_cmd!("practice-lab")
        .args([
            "login",
            "--email",
            "tester@example.com",
            "--password",
            "password123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Login successful! Welcome, tester@example.com.",
        ));
}

#[test]
fn login_validation_reports_both_fields() {
    cargo_bin_cmd!("practice-lab")
        .args(["login", "--email", "nope", "--password", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email has an invalid format"))
        .stdout(predicate::str::contains(
            "Password must be at least 6 characters",
        ));
}

#[test]
fn form_state_without_terms_keeps_submit_disabled() {
    cargo_bin_cmd!("practice-lab")
        .args([
            "form-state",
            "--email",
            "qa@example.com",
            "--password",
            "longenough",
            "--submit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submit enabled: no"))
        .stdout(predicate::str::contains("Form submitted successfully!").not());
}

#[test]
fn quiz_with_coffee_scores_two() {
    cargo_bin_cmd!("practice-lab")
        .args([
            "quiz",
            "--q1",
            "quality assurance",
            "--q2",
            "unit",
            "--q2",
            "manual",
            "--q2",
            "coffee",
            "--q3",
            "early",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored 2/3"));
}

#[test]
fn quiz_rejects_unknown_option() {
    cargo_bin_cmd!("practice-lab")
        .args(["quiz", "--q1", "x", "--q2", "tea", "--q3", "early"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option 'tea'"));
}

#[test]
fn table_json_output_is_sorted_descending() {
    let output = cargo_bin_cmd!("practice-lab")
        .args(["--json", "table", "--sort", "age", "--sort", "age"])
        .output()
        .expect("run practice-lab");
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(view["scenario"], "table");
    assert_eq!(view["rows"][0]["name"], "Grace Kim");
    assert_eq!(view["sort"]["direction"], "descending");
}

#[test]
fn table_page_out_of_range_fails() {
    cargo_bin_cmd!("practice-lab")
        .args(["table", "--page", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page 4 is out of range"));
}

#[test]
fn replay_script_prints_each_step() {
    let temp = assert_fs::TempDir::new().unwrap();
    let script = temp.child("events.json");
    script
        .write_str(
            r#"{
  "page": "login",
  "events": [
    { "type": "input", "target": "login-email", "value": "tester@example.com" },
    { "type": "input", "target": "login-password", "value": "wrongpass" },
    { "type": "click", "target": "login-submit" },
    { "type": "click", "target": "login-remember-me" }
  ]
}"#,
        )
        .unwrap();

    cargo_bin_cmd!("practice-lab")
        .arg("replay")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#3 click login-submit (applied)"))
        .stdout(predicate::str::contains("Invalid credentials. Please try again."))
        .stdout(predicate::str::contains(
            "#4 click login-remember-me (ignored)",
        ));
}

#[test]
fn replay_rejects_unknown_page() {
    let temp = assert_fs::TempDir::new().unwrap();
    let script = temp.child("events.json");
    script
        .write_str(r#"{ "page": "checkout", "events": [] }"#)
        .unwrap();

    cargo_bin_cmd!("practice-lab")
        .arg("replay")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse event script"));
}

#[test]
fn bad_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("lab.toml");
    config
        .write_str("[table]\nsortable_columns = [\"salary\"]\n\n[dataset]\ncolumns = [\"name\"]\n")
        .unwrap();

    cargo_bin_cmd!("practice-lab")
        .arg("--config")
        .arg(config.path())
        .arg("test-ids")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lab config"));
}

#[test]
fn test_ids_lists_one_page() {
    cargo_bin_cmd!("practice-lab")
        .args(["test-ids", "data-loading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-loading:"))
        .stdout(predicate::str::contains("load-spinner"))
        .stdout(predicate::str::contains("login-email").not());
}

#[test]
fn schema_describes_event_script() {
    cargo_bin_cmd!("practice-lab")
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("EventScript"))
        .stdout(predicate::str::contains("\"wait\""));
}

#[test]
fn forced_failure_load_shows_error_toast() {
    cargo_bin_cmd!("practice-lab")
        .args(["load", "--outcome", "failure"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[toast] Network error: could not load data. Please try again.",
        ))
        .stdout(predicate::str::contains("Load button enabled: yes"));
}
