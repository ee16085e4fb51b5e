//! What the table body shows for a given set of loading flags.

use crate::constants::INITIAL_SKELETON_ROWS;

/// Body mode, derived from props on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// First load with nothing to show: skeleton header and rows
    InitialLoading,
    /// A new page is on its way: real header, dimmed skeleton rows
    Refetching,
    Empty,
    Populated,
}

impl RenderMode {
    pub fn derive(is_loading: bool, is_fetching: bool, data_len: usize) -> Self {
        if is_loading && data_len == 0 {
            Self::InitialLoading
        } else if is_fetching && data_len > 0 {
            Self::Refetching
        } else if data_len == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }

    /// Number of skeleton body rows, `None` when real rows or the empty
    /// state are drawn
    pub fn skeleton_rows(self, page_size: usize) -> Option<usize> {
        match self {
            Self::InitialLoading => Some(INITIAL_SKELETON_ROWS),
            Self::Refetching => Some(page_size),
            Self::Empty | Self::Populated => None,
        }
    }

    pub fn shows_real_header(self) -> bool {
        !matches!(self, Self::InitialLoading)
    }

    /// Rows accept selection, cursor and action input
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Populated)
    }
}
