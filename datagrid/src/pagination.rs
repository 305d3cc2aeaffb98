//! Pagination stage: page bounds, clamping and navigation.

use std::ops::Range;

use crate::error::GridError;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page size and index of a grid.
///
/// Every method takes the current number of filtered rows so the page index
/// can be kept inside `0..max(1, page_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    page_index: usize,
    enabled: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            enabled: true,
        }
    }
}

impl PaginationState {
    /// Create pagination state on the first page.
    pub fn new(page_size: usize, enabled: bool) -> Result<Self, GridError> {
        if page_size == 0 {
            return Err(GridError::InvalidPageSize { size: page_size });
        }
        Ok(Self {
            page_size,
            page_index: 0,
            enabled,
        })
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 0-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Whether rows are split into pages at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of pages for `total` rows. Never less than 1.
    pub fn page_count(&self, total: usize) -> usize {
        if !self.enabled {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Pull the page index back into range. Returns whether it moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        false
    }

    /// Go to a page, clamped to the valid range.
    ///
    /// Returns whether the page changed.
    pub fn set_page_index(&mut self, index: usize, total: usize) -> bool {
        let index = index.min(self.page_count(total) - 1);
        if index == self.page_index {
            return false;
        }
        self.page_index = index;
        true
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<bool, GridError> {
        if size == 0 {
            return Err(GridError::InvalidPageSize { size });
        }
        let changed = size != self.page_size || self.page_index != 0;
        self.page_size = size;
        self.page_index = 0;
        Ok(changed)
    }

    /// Check if there is a page after the current one.
    pub fn can_go_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    /// Check if there is a page before the current one.
    pub fn can_go_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Go to the next page.
    pub fn go_next(&mut self, total: usize) -> bool {
        if self.can_go_next(total) {
            self.page_index += 1;
            return true;
        }
        false
    }

    /// Go to the previous page.
    pub fn go_prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.page_index -= 1;
            return true;
        }
        false
    }

    /// Go to the first page.
    pub fn go_first(&mut self) -> bool {
        let changed = self.page_index != 0;
        self.page_index = 0;
        changed
    }

    /// Go to the last page.
    pub fn go_last(&mut self, total: usize) -> bool {
        self.set_page_index(self.page_count(total) - 1, total)
    }

    /// Positions of the current page within `total` rows.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        if !self.enabled {
            return 0..total;
        }
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Slice out the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Summary for rendering page controls.
    pub fn summary(&self, total_filtered: usize, total_rows: usize) -> PaginationSummary {
        let range = self.page_range(total_filtered);
        let (first_row, last_row) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        PaginationSummary {
            page_index: self.page_index,
            page_size: self.page_size,
            page_count: self.page_count(total_filtered),
            total_filtered,
            total_rows,
            first_row,
            last_row,
        }
    }
}

/// Pagination metadata of a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Current 0-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of pages, at least 1.
    pub page_count: usize,
    /// Rows left after filtering.
    pub total_filtered: usize,
    /// Rows handed to the grid.
    pub total_rows: usize,
    /// 1-based position of the first row on this page, 0 when empty.
    pub first_row: usize,
    /// 1-based position of the last row on this page, 0 when empty.
    pub last_row: usize,
}

impl PaginationSummary {
    /// Check if there is a previous page.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Check if there is a next page.
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}
