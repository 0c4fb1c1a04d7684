use practice_core::page::ids;
use practice_core::render::{
    render_form_state, render_login, render_loader, render_quiz, render_table, render_wizard,
};
use practice_core::{
    DataLoader, FailureSource, FieldValue, FormState, LOAD_DELAY, LoadError, LoadTicket,
    LoginForm, ManifestError, PageAffordances, PageId, PageManifest, QuizForm,
    RecordingNotifier, RenderedView, TableView, UuidFailureSource, Wizard,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::LabConfig;
use crate::events::UiEvent;

pub type BoxedFailureSource = Box<dyn FnMut() -> u8>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// What one replayed event did and what the page looked like afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub event: UiEvent,
    pub applied: bool,
    pub view: RenderedView,
}

enum Scenario {
    Login(LoginForm),
    FormState(FormState),
    Quiz(QuizForm),
    Table {
        view: TableView,
        affordances: PageAffordances,
    },
    Wizard(Wizard),
    DataLoading {
        loader: DataLoader<BoxedFailureSource>,
        pending: Option<LoadTicket>,
    },
}

/// A single page's state, driven one event at a time.
pub struct Session {
    manifest: PageManifest,
    scenario: Scenario,
    toasts: RecordingNotifier,
}

impl Session {
    pub fn new(page: PageId, config: &LabConfig) -> Result<Self, SessionError> {
        let mut source = UuidFailureSource;
        Self::with_failure_source(page, config, Box::new(move || source.roll()))
    }

    pub fn with_failure_source(
        page: PageId,
        config: &LabConfig,
        source: BoxedFailureSource,
    ) -> Result<Self, SessionError> {
        let manifest = PageManifest::for_page(page);
        manifest.check()?;

        let scenario = match page {
            PageId::Login => Scenario::Login(LoginForm::new()),
            PageId::FormState => Scenario::FormState(FormState::new()),
            PageId::Quiz => Scenario::Quiz(QuizForm::new()),
            PageId::Table => table_scenario(config, &config.table),
            PageId::Pagination => table_scenario(config, &config.pagination),
            PageId::Wizard => Scenario::Wizard(Wizard::new()),
            PageId::DataLoading => Scenario::DataLoading {
                loader: DataLoader::new(config.dataset.rows.clone(), source),
                pending: None,
            },
        };
        info!(%page, "session started");
        Ok(Self {
            manifest,
            scenario,
            toasts: RecordingNotifier::new(),
        })
    }

    pub fn page(&self) -> PageId {
        self.manifest.page
    }

    pub fn render(&self) -> RenderedView {
        match &self.scenario {
            Scenario::Login(form) => render_login(form),
            Scenario::FormState(form) => render_form_state(form),
            Scenario::Quiz(form) => render_quiz(form),
            Scenario::Table { view, .. } => render_table(view),
            Scenario::Wizard(wizard) => render_wizard(wizard),
            Scenario::DataLoading { loader, .. } => render_loader(loader, self.toasts.snapshot()),
        }
    }

    /// Applies one event. Events aimed at controls the page lacks are ignored.
    /// Toasts stay visible until the next event.
    pub async fn dispatch(&mut self, event: &UiEvent) -> bool {
        self.toasts.take();
        if let Some(target) = event.target()
            && !self.manifest.contains(target)
        {
            warn!(page = %self.manifest.page, target, "event targets an unknown test id");
            return false;
        }

        let applied = match &mut self.scenario {
            Scenario::Login(form) => apply_login(form, event),
            Scenario::FormState(form) => apply_form_state(form, event),
            Scenario::Quiz(form) => apply_quiz(form, event),
            Scenario::Table { view, affordances } => apply_table(view, affordances, event),
            Scenario::Wizard(wizard) => apply_wizard(wizard, event),
            Scenario::DataLoading { loader, pending } => {
                apply_loading(loader, pending, &self.toasts, event).await
            }
        };
        if applied {
            debug!(kind = event.kind(), target = ?event.target(), "event applied");
        } else {
            warn!(kind = event.kind(), target = ?event.target(), "event ignored");
        }
        applied
    }

    pub async fn replay(&mut self, events: &[UiEvent]) -> Vec<StepReport> {
        let mut reports = Vec::with_capacity(events.len());
        for (index, event) in events.iter().enumerate() {
            let applied = self.dispatch(event).await;
            reports.push(StepReport {
                index,
                event: event.clone(),
                applied,
                view: self.render(),
            });
        }
        reports
    }
}

fn table_scenario(config: &LabConfig, affordances: &PageAffordances) -> Scenario {
    let mut view = TableView::new(config.dataset.columns.clone(), config.dataset.rows.clone());
    if affordances.pagination {
        view = view.with_pagination(affordances.page_size);
    }
    Scenario::Table {
        view,
        affordances: affordances.clone(),
    }
}

fn apply_login(form: &mut LoginForm, event: &UiEvent) -> bool {
    match event {
        UiEvent::Input { target, value } if target == ids::LOGIN_EMAIL => {
            form.set_email(value.clone());
            true
        }
        UiEvent::Input { target, value } if target == ids::LOGIN_PASSWORD => {
            form.set_password(value.clone());
            true
        }
        UiEvent::Click { target } if target == ids::LOGIN_SUBMIT => {
            form.submit();
            true
        }
        _ => false,
    }
}

fn apply_form_state(form: &mut FormState, event: &UiEvent) -> bool {
    match event {
        UiEvent::Input { target, value } if target == ids::FORM_EMAIL => {
            form.set_email(value.clone());
            true
        }
        UiEvent::Input { target, value } if target == ids::FORM_PASSWORD => {
            form.set_password(value.clone());
            true
        }
        UiEvent::Toggle { target, checked } if target == ids::FORM_TERMS => {
            form.set_terms(*checked);
            true
        }
        UiEvent::Click { target } if target == ids::FORM_SUBMIT => {
            form.submit();
            true
        }
        _ => false,
    }
}

fn quiz_option<'a>(target: &'a str, prefix: &str) -> Option<&'a str> {
    target.strip_prefix(prefix)
}

fn apply_quiz(form: &mut QuizForm, event: &UiEvent) -> bool {
    match event {
        UiEvent::Input { target, value } if target == ids::QUIZ_Q1 => {
            form.set_q1(value.clone());
            true
        }
        UiEvent::Click { target } if target == ids::QUIZ_SUBMIT => {
            let _ = form.submit();
            true
        }
        UiEvent::Toggle { target, checked } => match quiz_option(target, "quiz-q2-") {
            Some(option) => {
                form.toggle_q2(option, *checked);
                true
            }
            None => false,
        },
        UiEvent::Select { target } | UiEvent::Click { target } => {
            match quiz_option(target, "quiz-q3-") {
                Some(option) => {
                    form.select_q3(option);
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

fn apply_table(view: &mut TableView, affordances: &PageAffordances, event: &UiEvent) -> bool {
    match event {
        UiEvent::Input { target, value } if target == ids::TABLE_SEARCH && affordances.search => {
            view.set_filter(value.clone());
            true
        }
        UiEvent::Click { target } if target == ids::PAGINATION_NEXT => view.next_page(),
        UiEvent::Click { target } if target == ids::PAGINATION_PREV => view.previous_page(),
        UiEvent::Click { target } => match target.strip_prefix("table-sort-") {
            Some(column) if affordances.is_sortable(column) => {
                view.sort_by(column);
                true
            }
            _ => false,
        },
        _ => false,
    }
}

fn apply_wizard(wizard: &mut Wizard, event: &UiEvent) -> bool {
    match event {
        UiEvent::Input { target, value } => match wizard_field(target) {
            Some(field) => {
                wizard.set_value(field, FieldValue::text(value.clone()));
                true
            }
            None => false,
        },
        UiEvent::Toggle { target, checked } if target == ids::WIZARD_TERMS => {
            wizard.set_value("terms", FieldValue::Checked(*checked));
            true
        }
        UiEvent::Click { target } if target == ids::WIZARD_NEXT => {
            wizard.next();
            true
        }
        UiEvent::Click { target } if target == ids::WIZARD_BACK => {
            wizard.back();
            true
        }
        UiEvent::Click { target } if target == ids::WIZARD_FINISH => {
            wizard.finish();
            true
        }
        _ => false,
    }
}

fn wizard_field(target: &str) -> Option<&'static str> {
    match target {
        ids::WIZARD_NAME => Some("name"),
        ids::WIZARD_EMAIL => Some("email"),
        ids::WIZARD_USERNAME => Some("username"),
        ids::WIZARD_PASSWORD => Some("password"),
        _ => None,
    }
}

async fn apply_loading(
    loader: &mut DataLoader<BoxedFailureSource>,
    pending: &mut Option<LoadTicket>,
    toasts: &RecordingNotifier,
    event: &UiEvent,
) -> bool {
    match event {
        UiEvent::Click { target } if target == ids::LOAD_BUTTON => match loader.begin() {
            Ok(ticket) => {
                *pending = Some(ticket);
                true
            }
            Err(err) => {
                debug!(%err, "load button is disabled");
                false
            }
        },
        UiEvent::Wait => match pending.take() {
            Some(ticket) => {
                tokio::time::sleep(LOAD_DELAY).await;
                match loader.complete(ticket, toasts) {
                    Ok(rows) => debug!(rows = rows.len(), "load resolved"),
                    Err(LoadError::StaleTicket) => {
                        error!("pending load ticket was not accepted by the loader");
                        return false;
                    }
                    Err(err) => debug!(%err, "load failed"),
                }
                true
            }
            None => false,
        },
        _ => false,
    }
}
