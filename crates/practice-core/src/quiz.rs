use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::validate::check_required_text;

pub const Q1_ANSWER: &str = "quality assurance";
pub const Q2_REQUIRED: [&str; 2] = ["unit", "manual"];
pub const Q2_FORBIDDEN: &str = "coffee";
pub const Q3_ANSWER: &str = "early";
pub const MAX_SCORE: u8 = 3;

/// Checkbox options rendered for question 2.
pub const Q2_OPTIONS: [&str; 4] = ["unit", "manual", "coffee", "integration"];
/// Radio options rendered for question 3.
pub const Q3_OPTIONS: [&str; 3] = ["early", "late", "never"];

/// Answers captured when the quiz is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizSubmission {
    #[serde(default)]
    pub q1: String,
    #[serde(default)]
    pub q2: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<String>,
}

/// First unmet precondition; scoring does not run while one is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[serde(rename_all = "snake_case")]
pub enum QuizIncomplete {
    #[error("Please answer question 1.")]
    MissingQ1,
    #[error("Please select at least one option for question 2.")]
    MissingQ2,
    #[error("Please select one option for question 3.")]
    MissingQ3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizScore {
    pub value: u8,
    pub per_question: [bool; 3],
}

impl QuizScore {
    pub fn is_perfect(&self) -> bool {
        self.value == MAX_SCORE
    }

    pub fn message(&self) -> String {
        format!("You scored {}/{}", self.value, MAX_SCORE)
    }
}

/// Preconditions are checked in question order and stop at the first failure.
pub fn check_complete(submission: &QuizSubmission) -> Result<(), QuizIncomplete> {
    if !check_required_text(&submission.q1).valid {
        return Err(QuizIncomplete::MissingQ1);
    }
    if submission.q2.is_empty() {
        return Err(QuizIncomplete::MissingQ2);
    }
    match submission.q3.as_deref() {
        Some(choice) if !choice.is_empty() => Ok(()),
        _ => Err(QuizIncomplete::MissingQ3),
    }
}

pub fn score(submission: &QuizSubmission) -> Result<QuizScore, QuizIncomplete> {
    check_complete(submission)?;

    let per_question = [
        q1_correct(&submission.q1),
        q2_correct(&submission.q2),
        submission.q3.as_deref() == Some(Q3_ANSWER),
    ];
    let value = per_question.iter().filter(|correct| **correct).count() as u8;
    debug!(value, ?per_question, "quiz scored");
    Ok(QuizScore {
        value,
        per_question,
    })
}

fn q1_correct(answer: &str) -> bool {
    answer.trim().to_lowercase() == Q1_ANSWER
}

fn q2_correct(selected: &BTreeSet<String>) -> bool {
    Q2_REQUIRED
        .iter()
        .all(|required| selected.contains(*required))
        && !selected.contains(Q2_FORBIDDEN)
}

/// Quiz page state between submits.
#[derive(Debug, Clone, Default)]
pub struct QuizForm {
    submission: QuizSubmission,
    result: Option<Result<QuizScore, QuizIncomplete>>,
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_q1(&mut self, answer: impl Into<String>) {
        self.submission.q1 = answer.into();
    }

    pub fn toggle_q2(&mut self, option: &str, checked: bool) {
        if checked {
            self.submission.q2.insert(option.to_string());
        } else {
            self.submission.q2.remove(option);
        }
    }

    /// Radio semantics: selecting replaces any previous choice.
    pub fn select_q3(&mut self, option: impl Into<String>) {
        self.submission.q3 = Some(option.into());
    }

    pub fn submission(&self) -> &QuizSubmission {
        &self.submission
    }

    pub fn submit(&mut self) -> Result<QuizScore, QuizIncomplete> {
        let result = score(&self.submission);
        self.result = Some(result);
        result
    }

    pub fn result(&self) -> Option<Result<QuizScore, QuizIncomplete>> {
        self.result
    }
}
