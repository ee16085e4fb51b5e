use crate::catalog::{Page, Prize};
use crate::ui::components::data_table::{FilterValueMap, SelectOption};

/// Interaction reported by a data table to its host page
///
/// Key handling on the table returns one of these; the host matches on it,
/// starts whatever async work it implies and feeds the outcome back as props.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction<T> {
    PageChange(usize),
    PageSizeChange(usize),
    /// The complete next filter map, never a patch
    FiltersChange(FilterValueMap),
    RowAction {
        action_id: String,
        row: T,
    },
    BulkAction {
        action_id: String,
        row_ids: Vec<String>,
    },
    ToolbarAction(String),
    EmptyStateAction(String),
    None,
}

impl<T> TableAction<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Application level actions, including results sent back by background tasks
#[derive(Debug, Clone)]
pub enum Action {
    // Page data
    Reload,
    PageLoaded { request: u64, page: Page<Prize> },
    PageFailed { request: u64, error: String },
    CategoriesLoaded(Vec<SelectOption>),

    // Mutations
    BulkCompleted { action_id: String, affected: usize },
    BulkFailed { action_id: String, error: String },
    RowActionCompleted { action_id: String, row_id: String },
    RowActionFailed { action_id: String, error: String },

    // UI operations
    ToggleHelp,
    ToggleLogs,

    // App control
    Quit,
    None,
}
