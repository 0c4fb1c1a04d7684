#![allow(missing_docs)]

pub mod field;
pub mod gate;
pub mod loader;
pub mod login;
pub mod notify;
pub mod page;
pub mod pagination;
pub mod quiz;
pub mod render;
pub mod table;
pub mod validate;
pub mod wizard;

pub use field::{FieldError, FieldKind, FieldValue, ValidationResult};
pub use gate::{FieldReport, FormGate, FormState, FormStateOutcome, GateEvaluation, GateField};
pub use loader::{
    DataLoader, FAILURE_PERCENT, FailureSource, LOAD_DELAY, LoadError, LoadTicket,
    UuidFailureSource,
};
pub use login::{Credentials, LoginForm, LoginOutcome, VALID_EMAIL, VALID_PASSWORD, attempt_login};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use page::{ManifestError, PageAffordances, PageId, PageManifest};
pub use pagination::{Pager, page};
pub use quiz::{QuizForm, QuizIncomplete, QuizScore, QuizSubmission, score};
pub use render::{RenderedView, Tone, render_json, render_text};
pub use table::{Row, SortDirection, SortState, TableView, TextFilter, compare_cells, filter, sort};
pub use validate::{
    FORM_STATE_PASSWORD_MIN, LOGIN_PASSWORD_MIN, check_email, check_password, validate,
};
pub use wizard::{StepOutcome, Wizard, WizardStep};
