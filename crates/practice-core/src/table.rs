use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::pagination::Pager;

/// A table row: named text cells. Filtering and sorting never modify rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new<K, V>(cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Missing cells read as empty text.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &BTreeMap<String, String> {
        &self.cells
    }
}

/// Lazily yields the rows accepted by `predicate`, in their original order.
pub fn filter<'a, P>(rows: &'a [Row], predicate: P) -> impl Iterator<Item = &'a Row> + 'a
where
    P: Fn(&Row) -> bool + 'a,
{
    rows.iter().filter(move |row| predicate(row))
}

/// Case-insensitive substring match over one column or every cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl TextFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            column: None,
        }
    }

    pub fn on_column(query: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            column: Some(column.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn matches(&self, row: &Row) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        match &self.column {
            Some(column) => row.get(column).to_lowercase().contains(&needle),
            None => row
                .cells()
                .values()
                .any(|cell| cell.to_lowercase().contains(&needle)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Numeric when both cells parse as numbers, text otherwise.
pub fn compare_cells(left: &str, right: &str) -> Ordering {
    match (parse_number(left), parse_number(right)) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        _ => compare_text(left, right),
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Base letters first, then accents, then case with lowercase ahead of uppercase.
fn compare_text(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(&base_letters(right))
        .then_with(|| accented(left).cmp(&accented(right)))
        .then_with(|| {
            let upper = |text: &str| text.chars().map(char::is_uppercase).collect::<Vec<_>>();
            upper(left).cmp(&upper(right))
        })
        .then_with(|| left.cmp(right))
}

fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

/// Stable sort of borrowed rows; ties keep their incoming order in both directions.
pub fn sort_rows<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
    key: &str,
    direction: SortDirection,
) -> Vec<&'a Row> {
    let mut sorted = rows.into_iter().collect::<Vec<_>>();
    sorted.sort_by(|left, right| {
        let ordering = compare_cells(left.get(key), right.get(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

pub fn sort(rows: &[Row], key: &str, direction: SortDirection) -> Vec<Row> {
    sort_rows(rows, key, direction).into_iter().cloned().collect()
}

/// Which column the table is sorted by, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips the direction; a new column starts ascending.
    pub fn toggle(&mut self, key: &str) -> SortDirection {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }
}

/// Table page state: source rows plus the filter, sort and optional pager applied to them.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<String>,
    rows: Vec<Row>,
    filter: TextFilter,
    sort: SortState,
    pager: Option<Pager>,
}

impl TableView {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            filter: TextFilter::default(),
            sort: SortState::default(),
            pager: None,
        }
    }

    pub fn with_pagination(mut self, page_size: NonZeroUsize) -> Self {
        let total = self.visible_rows().len();
        self.pager = Some(Pager::new(total, page_size));
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filter(&self) -> &TextFilter {
        &self.filter
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.reset_pager();
        debug!(query = %self.filter.query, "table filter changed");
    }

    pub fn sort_by(&mut self, key: &str) -> SortDirection {
        let direction = self.sort.toggle(key);
        self.reset_pager();
        debug!(key, direction = direction.as_str(), "table sorted");
        direction
    }

    /// Filtered then sorted, before paging.
    pub fn visible_rows(&self) -> Vec<&Row> {
        let matching = filter(&self.rows, |row| self.filter.matches(row));
        match &self.sort.key {
            Some(key) => sort_rows(matching, key, self.sort.direction),
            None => matching.collect(),
        }
    }

    pub fn current_rows(&self) -> Vec<&Row> {
        let visible = self.visible_rows();
        match &self.pager {
            Some(pager) => pager.window(&visible).to_vec(),
            None => visible,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.as_mut().is_some_and(Pager::next)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.as_mut().is_some_and(Pager::previous)
    }

    pub fn go_to_page(&mut self, page_number: usize) -> bool {
        self.pager
            .as_mut()
            .is_some_and(|pager| pager.go_to(page_number))
    }

    fn reset_pager(&mut self) {
        if self.pager.is_some() {
            let total = self.visible_rows().len();
            if let Some(pager) = self.pager.as_mut() {
                pager.reset(total);
            }
        }
    }
}
