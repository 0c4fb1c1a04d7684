use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scenario pages of the practice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Login,
    FormState,
    Quiz,
    Table,
    Pagination,
    Wizard,
    DataLoading,
}

impl PageId {
    pub const ALL: [PageId; 7] = [
        PageId::Login,
        PageId::FormState,
        PageId::Quiz,
        PageId::Table,
        PageId::Pagination,
        PageId::Wizard,
        PageId::DataLoading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Login => "login",
            PageId::FormState => "form-state",
            PageId::Quiz => "quiz",
            PageId::Table => "table",
            PageId::Pagination => "pagination",
            PageId::Wizard => "wizard",
            PageId::DataLoading => "data-loading",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = ManifestError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == raw)
            .ok_or_else(|| ManifestError::UnknownPage(raw.to_string()))
    }
}

/// Test ids shared by automation scripts. Never repurpose one of these.
pub mod ids {
    pub const LOGIN_EMAIL: &str = "login-email";
    pub const LOGIN_PASSWORD: &str = "login-password";
    pub const LOGIN_SUBMIT: &str = "login-submit";
    pub const LOGIN_MESSAGE: &str = "login-message";

    pub const FORM_EMAIL: &str = "form-email";
    pub const FORM_PASSWORD: &str = "form-password";
    pub const FORM_TERMS: &str = "form-terms";
    pub const FORM_SUBMIT: &str = "form-submit";
    pub const FORM_MESSAGE: &str = "form-message";

    pub const QUIZ_Q1: &str = "quiz-q1";
    pub const QUIZ_Q2_UNIT: &str = "quiz-q2-unit";
    pub const QUIZ_Q2_MANUAL: &str = "quiz-q2-manual";
    pub const QUIZ_Q2_COFFEE: &str = "quiz-q2-coffee";
    pub const QUIZ_Q2_INTEGRATION: &str = "quiz-q2-integration";
    pub const QUIZ_Q3_EARLY: &str = "quiz-q3-early";
    pub const QUIZ_Q3_LATE: &str = "quiz-q3-late";
    pub const QUIZ_Q3_NEVER: &str = "quiz-q3-never";
    pub const QUIZ_SUBMIT: &str = "quiz-submit";
    pub const QUIZ_RESULT: &str = "quiz-result";

    pub const TABLE_SEARCH: &str = "table-search";
    pub const TABLE_SORT_NAME: &str = "table-sort-name";
    pub const TABLE_SORT_ROLE: &str = "table-sort-role";
    pub const TABLE_SORT_AGE: &str = "table-sort-age";
    pub const TABLE_BODY: &str = "table-body";
    pub const TABLE_ROW_COUNT: &str = "table-row-count";

    pub const PAGINATION_PREV: &str = "pagination-prev";
    pub const PAGINATION_NEXT: &str = "pagination-next";
    pub const PAGINATION_INDICATOR: &str = "pagination-page-indicator";
    pub const PAGINATION_LIST: &str = "pagination-list";

    pub const WIZARD_NAME: &str = "wizard-name";
    pub const WIZARD_EMAIL: &str = "wizard-email";
    pub const WIZARD_USERNAME: &str = "wizard-username";
    pub const WIZARD_PASSWORD: &str = "wizard-password";
    pub const WIZARD_TERMS: &str = "wizard-terms";
    pub const WIZARD_NEXT: &str = "wizard-next";
    pub const WIZARD_BACK: &str = "wizard-back";
    pub const WIZARD_FINISH: &str = "wizard-finish";
    pub const WIZARD_STEP_INDICATOR: &str = "wizard-step-indicator";
    pub const WIZARD_MESSAGE: &str = "wizard-message";

    pub const LOAD_BUTTON: &str = "load-button";
    pub const LOAD_SPINNER: &str = "load-spinner";
    pub const LOAD_RESULTS: &str = "load-results";
    pub const TOAST: &str = "toast";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("unknown page '{0}'")]
    UnknownPage(String),
    #[error("test id '{id}' is declared more than once on page '{page}'")]
    DuplicateTestId { page: PageId, id: String },
    #[error("page '{0}' declares an empty test id")]
    EmptyTestId(PageId),
}

/// The test ids a page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageManifest {
    pub page: PageId,
    pub test_ids: &'static [&'static str],
}

impl PageManifest {
    pub fn for_page(page: PageId) -> Self {
        use ids::*;
        let test_ids: &'static [&'static str] = match page {
            PageId::Login => &[LOGIN_EMAIL, LOGIN_PASSWORD, LOGIN_SUBMIT, LOGIN_MESSAGE],
            PageId::FormState => &[FORM_EMAIL, FORM_PASSWORD, FORM_TERMS, FORM_SUBMIT, FORM_MESSAGE],
            PageId::Quiz => &[
                QUIZ_Q1,
                QUIZ_Q2_UNIT,
                QUIZ_Q2_MANUAL,
                QUIZ_Q2_COFFEE,
                QUIZ_Q2_INTEGRATION,
                QUIZ_Q3_EARLY,
                QUIZ_Q3_LATE,
                QUIZ_Q3_NEVER,
                QUIZ_SUBMIT,
                QUIZ_RESULT,
            ],
            PageId::Table => &[
                TABLE_SEARCH,
                TABLE_SORT_NAME,
                TABLE_SORT_ROLE,
                TABLE_SORT_AGE,
                TABLE_BODY,
                TABLE_ROW_COUNT,
            ],
            PageId::Pagination => &[
                PAGINATION_PREV,
                PAGINATION_NEXT,
                PAGINATION_INDICATOR,
                PAGINATION_LIST,
            ],
            PageId::Wizard => &[
                WIZARD_NAME,
                WIZARD_EMAIL,
                WIZARD_USERNAME,
                WIZARD_PASSWORD,
                WIZARD_TERMS,
                WIZARD_NEXT,
                WIZARD_BACK,
                WIZARD_FINISH,
                WIZARD_STEP_INDICATOR,
                WIZARD_MESSAGE,
            ],
            PageId::DataLoading => &[LOAD_BUTTON, LOAD_SPINNER, LOAD_RESULTS, TOAST],
        };
        Self { page, test_ids }
    }

    pub fn contains(&self, test_id: &str) -> bool {
        self.test_ids.contains(&test_id)
    }

    /// Ids must be non-empty and unique within the page.
    pub fn check(&self) -> Result<(), ManifestError> {
        let mut seen = BTreeSet::new();
        for id in self.test_ids {
            if id.trim().is_empty() {
                return Err(ManifestError::EmptyTestId(self.page));
            }
            if !seen.insert(*id) {
                return Err(ManifestError::DuplicateTestId {
                    page: self.page,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN)
}

fn default_true() -> bool {
    true
}

/// Optional UI pieces present on a table-like page, fixed when the page is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageAffordances {
    #[serde(default = "default_true")]
    pub search: bool,
    #[serde(default)]
    pub sortable_columns: Vec<String>,
    #[serde(default)]
    pub pagination: bool,
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
}

impl Default for PageAffordances {
    fn default() -> Self {
        Self {
            search: true,
            sortable_columns: Vec::new(),
            pagination: false,
            page_size: default_page_size(),
        }
    }
}

impl PageAffordances {
    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable_columns.iter().any(|candidate| candidate == column)
    }
}
