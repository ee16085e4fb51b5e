//! Row selection keyed by row id.

use std::collections::BTreeSet;

use crate::constants::{CHECKBOX_CHECKED, CHECKBOX_INDETERMINATE, CHECKBOX_UNCHECKED};

/// State of the selection column's header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Checked,
    Unchecked,
    /// Some but not all rows of the current page are selected
    Indeterminate,
}

impl HeaderCheckbox {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Checked => CHECKBOX_CHECKED,
            Self::Unchecked => CHECKBOX_UNCHECKED,
            Self::Indeterminate => CHECKBOX_INDETERMINATE,
        }
    }
}

/// Selected row ids. Absence means not selected.
///
/// Ids come from the host's `get_row_id`, never from row positions, so a
/// selection survives re-sorting and re-fetching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: BTreeSet<String>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected.insert(id.into());
    }

    pub fn deselect(&mut self, id: &str) {
        self.selected.remove(id);
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected ids in a stable order
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Header checkbox state computed over the current page only
    pub fn header_state(&self, page_ids: &[String]) -> HeaderCheckbox {
        if page_ids.is_empty() {
            return HeaderCheckbox::Unchecked;
        }

        let selected_on_page = page_ids.iter().filter(|id| self.is_selected(id)).count();
        let all_selected = selected_on_page == page_ids.len();
        let some_selected = selected_on_page > 0;

        if all_selected {
            HeaderCheckbox::Checked
        } else if some_selected {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }

    /// Header checkbox click: select every row of the page, or deselect them
    /// all when the page is already fully selected. Rows of other pages keep
    /// their state.
    pub fn toggle_page(&mut self, page_ids: &[String]) {
        if self.header_state(page_ids) == HeaderCheckbox::Checked {
            for id in page_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page_ids.iter().cloned());
        }
    }
}
