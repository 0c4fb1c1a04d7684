use std::fs;
use std::path::{Path, PathBuf};

use practice_core::page::ids;
use practice_core::{PageAffordances, PageId, PageManifest, Row};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDED_CONFIG: &str = include_str!("../assets/lab.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page '{page}' sorts by column '{column}' which the dataset does not define")]
    UnknownSortColumn { page: PageId, column: String },
    #[error("page '{page}' enables a feature but has no '{control}' control")]
    MissingControl { page: PageId, control: String },
}

/// Rows shown by the table, pagination and data-loading pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Page setup resolved once before a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default)]
    pub table: PageAffordances,
    #[serde(default)]
    pub pagination: PageAffordances,
    pub dataset: Dataset,
}

impl LabConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Reads `path` when given, otherwise the built-in configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), "loading lab config");
                Self::from_toml_str(&raw)
            }
            None => Self::embedded(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (page, affordances) in [
            (PageId::Table, &self.table),
            (PageId::Pagination, &self.pagination),
        ] {
            if let Some(column) = affordances
                .sortable_columns
                .iter()
                .find(|column| !self.dataset.columns.contains(column))
            {
                return Err(ConfigError::UnknownSortColumn {
                    page,
                    column: column.clone(),
                });
            }
            check_controls(page, affordances)?;
        }
        Ok(())
    }
}

/// Every enabled feature must have its controls on the page.
fn check_controls(page: PageId, affordances: &PageAffordances) -> Result<(), ConfigError> {
    let manifest = PageManifest::for_page(page);
    let mut required = affordances
        .sortable_columns
        .iter()
        .map(|column| format!("table-sort-{column}"))
        .collect::<Vec<_>>();
    if affordances.pagination {
        required.push(ids::PAGINATION_PREV.to_string());
        required.push(ids::PAGINATION_NEXT.to_string());
    }
    match required.into_iter().find(|id| !manifest.contains(id)) {
        Some(control) => Err(ConfigError::MissingControl { page, control }),
        None => Ok(()),
    }
}
