//! Prize catalog: the data behind the prizes admin page.
//!
//! The page talks to its data through [`PageSource`], which returns exactly
//! one page per request. [`PrizeCatalog`] is the in-memory implementation
//! used by the application and the tests.

pub mod memory;
pub mod seed;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::ui::components::data_table::{FilterValueMap, SelectOption};

pub use memory::PrizeCatalog;

/// Filter ids understood by the catalog
pub const FILTER_SEARCH: &str = "search";
pub const FILTER_STATUS: &str = "status";
pub const FILTER_CATEGORY: &str = "category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeStatus {
    Active,
    OutOfStock,
    Archived,
}

impl PrizeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OutOfStock => "out_of_stock",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub status: PrizeStatus,
    pub cost_coins: u32,
    pub stock: u32,
    /// Sponsoring company; prizes funded by the platform have none
    pub company: Option<Company>,
    pub created_by: String,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// One-based
    pub page: usize,
    pub page_size: usize,
    /// Empty values mean unset
    pub filters: FilterValueMap,
}

impl PageQuery {
    pub fn new(page: usize, page_size: usize, filters: FilterValueMap) -> Self {
        Self {
            page,
            page_size,
            filters,
        }
    }

    /// Value of a filter, `None` when absent or empty
    pub fn filter(&self, id: &str) -> Option<&str> {
        self.filters.get(id).map(String::as_str).filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_count: usize,
    pub page_count: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            page_count: 1,
        }
    }
}

/// Number of pages needed for `total_count` rows, at least one
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Paged data source for a host page
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page<T>, CatalogError>;

    /// Options for the dynamic category filter
    async fn categories(&self) -> Result<Vec<SelectOption>, CatalogError>;

    /// Apply a bulk action; returns how many rows changed
    async fn bulk_action(&self, action_id: &str, ids: &[String]) -> Result<usize, CatalogError>;

    async fn row_action(&self, action_id: &str, id: &str) -> Result<(), CatalogError>;
}
