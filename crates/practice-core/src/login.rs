use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::field::FieldError;
use crate::validate::{LOGIN_PASSWORD_MIN, check_email, check_password};

/// The only account the login page accepts.
pub const VALID_EMAIL: &str = "tester@example.com";
pub const VALID_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn matches_account(&self) -> bool {
        self.email == VALID_EMAIL && self.password == VALID_PASSWORD
    }
}

/// What the login page shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginOutcome {
    /// At least one field failed validation; credentials were not compared.
    Invalid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<FieldError>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<FieldError>,
    },
    InvalidCredentials,
    Success,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            LoginOutcome::Invalid { email, password } => email
                .iter()
                .map(|reason| reason.describe("Email"))
                .chain(password.iter().map(|reason| reason.describe("Password")))
                .collect(),
            LoginOutcome::InvalidCredentials => {
                vec!["Invalid credentials. Please try again.".to_string()]
            }
            LoginOutcome::Success => vec![format!("Login successful! Welcome, {VALID_EMAIL}.")],
        }
    }
}

/// Soft gate: every submit is attempted, validation only picks the message.
pub fn attempt_login(credentials: &Credentials) -> LoginOutcome {
    let email = check_email(&credentials.email).reason;
    let password = check_password(&credentials.password, LOGIN_PASSWORD_MIN).reason;
    if email.is_some() || password.is_some() {
        debug!(?email, ?password, "login rejected by field validation");
        return LoginOutcome::Invalid { email, password };
    }

    if credentials.matches_account() {
        info!("login accepted");
        LoginOutcome::Success
    } else {
        info!("login rejected: credentials do not match");
        LoginOutcome::InvalidCredentials
    }
}

/// Login page state. The submit control is never disabled.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    credentials: Credentials,
    outcome: Option<LoginOutcome>,
    attempts: u32,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn submit(&mut self) -> &LoginOutcome {
        self.attempts += 1;
        self.outcome.insert(attempt_login(&self.credentials))
    }

    pub fn outcome(&self) -> Option<&LoginOutcome> {
        self.outcome.as_ref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
