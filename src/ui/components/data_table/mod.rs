//! Generic configuration-driven data table.
//!
//! Pages describe a table once with a [`TableConfig`] and hand the table one
//! page of rows per frame through [`TableProps`]. The table reports user
//! interaction back as [`TableAction`](crate::ui::core::TableAction) values.
//!
//! - [`config`] - Column, filter, action and pagination descriptors
//! - [`columns`] - Cell renderer registry
//! - [`toolbar`] - Search and select filters
//! - [`bulk_actions`] - Actions over the current selection
//! - [`pagination`] - Visible range and page navigation
//! - [`selection`] - Row selection keyed by row id
//! - [`render_mode`] - Skeleton, empty or populated body
//! - [`trail`] - Row entrance animation
//! - [`table`] - The table core tying everything together

pub mod bulk_actions;
pub mod columns;
pub mod config;
pub mod pagination;
pub mod render_mode;
pub mod selection;
pub mod table;
pub mod toolbar;
pub mod trail;

pub use columns::{render_cell, renderer_for};
pub use config::{
    Accessor, ActionConfig, ActionVariant, BadgeMapping, BulkActionConfig, ColumnConfig, ColumnKind, ColumnType,
    DynamicFilterOptions, EmptyState, EmptyStateAction, FilterConfig, FilterKind, FilterValueMap, PaginationConfig,
    SelectOption, TableActions, TableConfig, ToolbarAction,
};
pub use pagination::{visible_range, PaginationState, VisibleRange};
pub use render_mode::RenderMode;
pub use selection::{HeaderCheckbox, RowSelection};
pub use table::{available_actions, build_columns, DataTable, TableColumn, TableProps};
