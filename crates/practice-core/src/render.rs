use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::gate::{FormState, FormStateOutcome};
use crate::loader::{DataLoader, FailureSource};
use crate::login::{LoginForm, LoginOutcome};
use crate::notify::Notification;
use crate::page::ids;
use crate::quiz::QuizForm;
use crate::table::{SortState, TableView};
use crate::wizard::{StepOutcome, Wizard};

/// Visual tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginView {
    pub message_id: &'static str,
    pub tone: Tone,
    pub lines: Vec<String>,
    pub submit_enabled: bool,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormStateView {
    pub submit_id: &'static str,
    pub submit_enabled: bool,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub result_id: &'static str,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_question: Option<[bool; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageIndicator {
    pub current: usize,
    pub count: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRender {
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
    pub matching_rows: usize,
    pub filter: String,
    pub sort: SortState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageIndicator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
    pub step: usize,
    pub total_steps: usize,
    pub title: &'static str,
    pub back_enabled: bool,
    pub next_enabled: bool,
    pub finish_enabled: bool,
    pub completed: bool,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderView {
    pub button_enabled: bool,
    pub spinner_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_rows: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toasts: Vec<Notification>,
}

/// Presentation of one scenario's state, independent of any DOM.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum RenderedView {
    Login(LoginView),
    FormState(FormStateView),
    Quiz(QuizView),
    Table(TableRender),
    Wizard(WizardView),
    DataLoading(LoaderView),
}

pub fn render_login(form: &LoginForm) -> RenderedView {
    let (tone, lines) = match form.outcome() {
        None => (Tone::Neutral, Vec::new()),
        Some(outcome @ LoginOutcome::Success) => (Tone::Success, outcome.messages()),
        Some(outcome) => (Tone::Error, outcome.messages()),
    };
    RenderedView::Login(LoginView {
        message_id: ids::LOGIN_MESSAGE,
        tone,
        lines,
        submit_enabled: true,
        attempts: form.attempts(),
    })
}

pub fn render_form_state(form: &FormState) -> RenderedView {
    let evaluation = form.evaluation();
    // Only fields the user has touched get an inline error.
    let field_errors = evaluation
        .failures()
        .filter(|report| form.value(&report.id).is_some())
        .filter_map(|report| report.message().map(|message| (report.id.clone(), message)))
        .collect();
    let (tone, message) = match form.outcome() {
        Some(FormStateOutcome::Submitted) => (
            Tone::Success,
            Some("Form submitted successfully!".to_string()),
        ),
        Some(FormStateOutcome::Disabled) | None => (Tone::Neutral, None),
    };
    RenderedView::FormState(FormStateView {
        submit_id: ids::FORM_SUBMIT,
        submit_enabled: form.submit_enabled(),
        tone,
        message,
        field_errors,
    })
}

pub fn render_quiz(form: &QuizForm) -> RenderedView {
    let view = match form.result() {
        None => QuizView {
            result_id: ids::QUIZ_RESULT,
            tone: Tone::Neutral,
            message: None,
            score: None,
            per_question: None,
        },
        Some(Err(incomplete)) => QuizView {
            result_id: ids::QUIZ_RESULT,
            tone: Tone::Error,
            message: Some(incomplete.to_string()),
            score: None,
            per_question: None,
        },
        Some(Ok(score)) => QuizView {
            result_id: ids::QUIZ_RESULT,
            tone: if score.is_perfect() {
                Tone::Success
            } else {
                Tone::Neutral
            },
            message: Some(score.message()),
            score: Some(score.value),
            per_question: Some(score.per_question),
        },
    };
    RenderedView::Quiz(view)
}

pub fn render_table(table: &TableView) -> RenderedView {
    let rows = table
        .current_rows()
        .into_iter()
        .map(|row| row.cells().clone())
        .collect();
    let page = table.pager().map(|pager| PageIndicator {
        current: pager.current_page(),
        count: pager.page_count(),
        previous_enabled: pager.has_previous(),
        next_enabled: pager.has_next(),
    });
    RenderedView::Table(TableRender {
        columns: table.columns().to_vec(),
        rows,
        matching_rows: table.visible_rows().len(),
        filter: table.filter().query.clone(),
        sort: table.sort_state().clone(),
        page,
    })
}

pub fn render_wizard(wizard: &Wizard) -> RenderedView {
    let (tone, lines) = match wizard.last_outcome() {
        Some(StepOutcome::Blocked { failures }) => (
            Tone::Error,
            failures.iter().filter_map(|report| report.message()).collect(),
        ),
        Some(StepOutcome::Completed) => (
            Tone::Success,
            vec!["Registration complete!".to_string()],
        ),
        _ => (Tone::Neutral, Vec::new()),
    };
    let step = wizard.current_step();
    RenderedView::Wizard(WizardView {
        step: step.number(),
        total_steps: wizard.total_steps(),
        title: step.title(),
        back_enabled: wizard.can_go_back(),
        next_enabled: wizard.can_go_next(),
        finish_enabled: wizard.can_finish(),
        completed: wizard.is_completed(),
        tone,
        lines,
    })
}

pub fn render_loader<S: FailureSource>(
    loader: &DataLoader<S>,
    toasts: Vec<Notification>,
) -> RenderedView {
    RenderedView::DataLoading(LoaderView {
        button_enabled: loader.control_enabled(),
        spinner_visible: loader.is_pending(),
        loaded_rows: loader.loaded().map(<[_]>::len),
        toasts,
    })
}

/// Render the view as a structured JSON value.
pub fn render_json(view: &RenderedView) -> Value {
    serde_json::to_value(view).unwrap_or(Value::Null)
}

/// Render the view as human-readable lines.
pub fn render_text(view: &RenderedView) -> String {
    let mut lines = Vec::new();
    match view {
        RenderedView::Login(login) => {
            lines.push(format!("Login attempts: {}", login.attempts));
            if login.lines.is_empty() {
                lines.push("No message".to_string());
            }
            lines.extend(login.lines.iter().cloned());
        }
        RenderedView::FormState(form) => {
            lines.push(format!("Submit enabled: {}", yes_no(form.submit_enabled)));
            for (field, error) in &form.field_errors {
                lines.push(format!("  {field}: {error}"));
            }
            if let Some(message) = &form.message {
                lines.push(message.clone());
            }
        }
        RenderedView::Quiz(quiz) => match &quiz.message {
            Some(message) => {
                lines.push(message.clone());
                if let Some(per_question) = quiz.per_question {
                    for (idx, correct) in per_question.iter().enumerate() {
                        let mark = if *correct { "correct" } else { "incorrect" };
                        lines.push(format!("  Question {}: {}", idx + 1, mark));
                    }
                }
            }
            None => lines.push("Quiz not submitted".to_string()),
        },
        RenderedView::Table(table) => {
            lines.push(table.columns.join(" | "));
            for row in &table.rows {
                let cells = table
                    .columns
                    .iter()
                    .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>();
                lines.push(cells.join(" | "));
            }
            lines.push(format!("Matching rows: {}", table.matching_rows));
            if let Some(key) = &table.sort.key {
                lines.push(format!(
                    "Sorted by {} ({})",
                    key,
                    table.sort.direction.as_str()
                ));
            }
            if let Some(page) = &table.page {
                lines.push(format!(
                    "Page {} of {} (previous: {}, next: {})",
                    page.current,
                    page.count,
                    enabled_label(page.previous_enabled),
                    enabled_label(page.next_enabled)
                ));
            }
        }
        RenderedView::Wizard(wizard) => {
            lines.push(format!(
                "Step {} of {}: {}",
                wizard.step, wizard.total_steps, wizard.title
            ));
            lines.extend(wizard.lines.iter().cloned());
        }
        RenderedView::DataLoading(loader) => {
            lines.push(format!("Load button enabled: {}", yes_no(loader.button_enabled)));
            if loader.spinner_visible {
                lines.push("Loading...".to_string());
            }
            if let Some(count) = loader.loaded_rows {
                lines.push(format!("Rows loaded: {count}"));
            }
            for toast in &loader.toasts {
                lines.push(format!("[toast] {}", toast.message));
            }
        }
    }
    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn enabled_label(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
