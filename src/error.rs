//! Error types for table configuration and the prize catalog.

use thiserror::Error;

/// Problems found while validating a [`TableConfig`](crate::ui::components::data_table::TableConfig).
///
/// These are raised only by explicit validation. Rendering a table never
/// fails on configuration gaps; it renders nothing for them instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table config must declare at least one column")]
    EmptyColumns,

    #[error("duplicate column id '{0}'")]
    DuplicateColumnId(String),

    #[error("duplicate filter id '{0}'")]
    DuplicateFilterId(String),

    #[error("pagination must offer at least one page size")]
    EmptyPageSizeOptions,

    #[error("default page size {0} is not one of the offered page sizes")]
    DefaultPageSizeNotOffered(usize),
}

/// Failures reported by a [`PageSource`](crate::catalog::PageSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("prize '{0}' not found")]
    NotFound(String),

    #[error("prize '{id}' cannot be changed: {reason}")]
    Rejected { id: String, reason: String },

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}
