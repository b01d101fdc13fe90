//! Page arithmetic for list views.

use crate::records::ListMeta;

/// Fixed number of rows per list page.
pub const PAGE_SIZE: u64 = 5;

/// Number of pages needed for `total` items at `page_size` per page.
#[must_use]
pub fn total_pages_for(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Current position in a paginated list (1-based page).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZE, total_items: 0, total_pages: 1 }
    }
}

impl Pager {
    /// "Previous" is disabled exactly on the first page.
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is disabled exactly on the last page (or when there are none).
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Advance one page. Returns `false` if already on the last page.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns `false` if already on the first page.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Back to page 1 (used whenever the search term changes).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Take totals from a list response.
    pub fn apply_meta(&mut self, meta: ListMeta) {
        self.total_items = meta.total;
        self.total_pages = meta.total_pages;
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;
