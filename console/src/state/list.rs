//! List page model shared by the companies, user groups, and users screens.
//!
//! DESIGN
//! ======
//! Holds the current page of rows plus everything the list chrome needs:
//! pager position, search term, which row the detail panel or delete modal
//! targets, and whether a delete is in flight. Fetching lives in the page;
//! this type only applies results.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use wire::{ListEnvelope, Pager};

/// What the body of a list page should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Table,
    /// A search or page returned nothing.
    NoResults,
    /// Nothing has been registered yet.
    NoRecords,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub pager: Pager,
    pub search: String,
    pub loaded: bool,
    pub selected: Option<String>,
    pub detail_open: bool,
    pub delete_open: bool,
    pub deleting: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pager: Pager::default(),
            search: String::new(),
            loaded: false,
            selected: None,
            detail_open: false,
            delete_open: false,
            deleting: false,
        }
    }
}

impl<T> ListState<T> {
    /// Replace the search term. A changed term goes back to page 1.
    pub fn set_search(&mut self, term: &str) -> bool {
        if self.search == term {
            return false;
        }
        term.clone_into(&mut self.search);
        self.pager.reset();
        true
    }

    /// Install a fetched page.
    pub fn apply_page(&mut self, page: ListEnvelope<T>) {
        self.items = page.data;
        self.pager.apply_meta(page.meta);
        self.loaded = true;
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        if !self.loaded {
            ListView::Loading
        } else if !self.items.is_empty() {
            ListView::Table
        } else if self.search.trim().is_empty() && self.pager.total_items == 0 {
            ListView::NoRecords
        } else {
            ListView::NoResults
        }
    }

    pub fn open_detail(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
        self.detail_open = true;
        self.delete_open = false;
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    pub fn open_delete(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
        self.delete_open = true;
        self.detail_open = false;
    }

    pub fn close_delete(&mut self) {
        self.delete_open = false;
        self.deleting = false;
    }

    /// Mark the delete as in flight and return its target. `None` when no
    /// row is selected or a delete is already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting || !self.delete_open {
            return None;
        }
        let id = self.selected.clone()?;
        self.deleting = true;
        Some(id)
    }

    /// A failed delete leaves the modal open for another try.
    pub fn delete_failed(&mut self) {
        self.deleting = false;
    }

    /// Drop a deleted row without refetching and close the modal.
    pub fn remove(&mut self, id: &str, id_of: impl Fn(&T) -> &str) {
        let before = self.items.len();
        self.items.retain(|item| id_of(item) != id);
        let removed = (before - self.items.len()) as u64;
        self.pager.total_items = self.pager.total_items.saturating_sub(removed);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.close_delete();
    }

    /// Advance one page; `false` when already on the last.
    pub fn next_page(&mut self) -> bool {
        self.pager.next()
    }

    /// Go back one page; `false` when already on the first.
    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }
}
