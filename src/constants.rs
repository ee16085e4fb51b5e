//! Constants used throughout the application
//!
//! This module centralizes UI text and layout values shared by the data
//! table components and the host page.

// Table body
/// Skeleton rows shown while the first page is loading, whatever the page size
pub const INITIAL_SKELETON_ROWS: usize = 5;
pub const SKELETON_CELL: &str = "▒▒▒▒▒▒▒▒";
pub const SKELETON_HEADER_CELL: &str = "░░░░░░";

// Selection column
pub const CHECKBOX_CHECKED: &str = "[x]";
pub const CHECKBOX_UNCHECKED: &str = "[ ]";
pub const CHECKBOX_INDETERMINATE: &str = "[-]";
pub const SELECTION_COLUMN_WIDTH: u16 = 3;

// Actions column
pub const ACTIONS_TRIGGER: &str = "⋯";
pub const ACTIONS_COLUMN_WIDTH: u16 = 3;
pub const ACTIONS_MENU_WIDTH: u16 = 28;

// Toolbar
/// Label of the select option that clears the filter
pub const SELECT_ALL_LABEL: &str = "Todos";
pub const SEARCH_ICON: &str = "🔍";
pub const CLEAR_ICON: &str = "✕";
pub const TOOLBAR_HEIGHT: u16 = 3;

// Pagination footer
pub const PAGINATION_HEIGHT: u16 = 1;
pub const PAGE_SIZE_LABEL: &str = "Rows per page";

// Bulk actions bar
pub const BULK_BAR_HEIGHT: u16 = 1;
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

// Row animation
/// Ticks between the entrance of two consecutive rows
pub const TRAIL_STAGGER_TICKS: u64 = 1;
/// Ticks a row spends fading in before it is fully shown
pub const TRAIL_FADE_TICKS: u64 = 2;

// Value fallbacks
pub const AVATAR_FALLBACK_INITIAL: &str = "?";
pub const ELLIPSIS: &str = "…";

// Host page messages
pub const SUCCESS_BULK_ARCHIVED: &str = "✅ Prizes archived";
pub const SUCCESS_BULK_DELETED: &str = "✅ Prizes deleted";
pub const SUCCESS_PRIZE_UPDATED: &str = "✅ Prize updated";
pub const ERROR_BULK_FAILED: &str = "❌ Bulk action failed";
pub const ERROR_ROW_ACTION_FAILED: &str = "❌ Action failed";
pub const ERROR_FETCH_FAILED: &str = "❌ Failed to load prizes";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINTS: &str = "j/k: move • Space: select • .: actions • /: search • n/p: page • ?: help • q: quit";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc' or 'L' to close";
