use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

/// Returns page `page_number` (1-based); pages past the end are empty.
pub fn page<T>(rows: &[T], page_size: NonZeroUsize, page_number: usize) -> &[T] {
    let size = page_size.get();
    let start = page_number.saturating_sub(1).saturating_mul(size);
    if page_number == 0 || start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(rows.len());
    &rows[start..end]
}

/// Cursor over a paged collection. The current page always stays in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pager {
    total_rows: usize,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Pager {
    pub fn new(total_rows: usize, page_size: NonZeroUsize) -> Self {
        Self {
            total_rows,
            page_size,
            current_page: 1,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size.get())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn go_to(&mut self, page_number: usize) -> bool {
        if page_number == 0 || page_number > self.page_count().max(1) {
            return false;
        }
        self.current_page = page_number;
        true
    }

    /// Back to page 1 over a collection of a new size.
    pub fn reset(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.current_page = 1;
    }

    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.page_size.get();
        let end = (start + self.page_size.get()).min(self.total_rows);
        start.min(end)..end
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_size, self.current_page)
    }
}
