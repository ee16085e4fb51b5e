//! In-memory prize catalog with simulated network latency.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{page_count, Page, PageQuery, PageSource, Prize, PrizeStatus, FILTER_CATEGORY, FILTER_SEARCH, FILTER_STATUS};
use crate::error::CatalogError;
use crate::ui::components::data_table::SelectOption;

/// Units added by the restock row action
pub const RESTOCK_AMOUNT: u32 = 10;

pub struct PrizeCatalog {
    prizes: RwLock<Vec<Prize>>,
    latency: Duration,
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>, latency: Duration) -> Self {
        Self {
            prizes: RwLock::new(prizes),
            latency,
        }
    }

    pub async fn len(&self) -> usize {
        self.prizes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.prizes.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<Prize> {
        self.prizes.read().await.iter().find(|p| p.id.to_string() == id).cloned()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn matches(prize: &Prize, query: &PageQuery) -> bool {
    if let Some(search) = query.filter(FILTER_SEARCH) {
        let needle = search.to_lowercase();
        let in_name = prize.name.to_lowercase().contains(&needle);
        let in_company = prize
            .company
            .as_ref()
            .is_some_and(|c| c.name.to_lowercase().contains(&needle));
        if !in_name && !in_company {
            return false;
        }
    }
    if let Some(status) = query.filter(FILTER_STATUS) {
        if prize.status.as_str() != status {
            return false;
        }
    }
    if let Some(category) = query.filter(FILTER_CATEGORY) {
        if prize.category != category {
            return false;
        }
    }
    true
}

fn deletable(prize: &Prize) -> Result<(), CatalogError> {
    if prize.status == PrizeStatus::Active && prize.stock > 0 {
        return Err(CatalogError::Rejected {
            id: prize.id.to_string(),
            reason: "prize is active with stock left; archive it first".to_string(),
        });
    }
    Ok(())
}

fn find_index(prizes: &[Prize], id: &str) -> Result<usize, CatalogError> {
    prizes
        .iter()
        .position(|p| p.id.to_string() == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

#[async_trait]
impl PageSource<Prize> for PrizeCatalog {
    async fn fetch_page(&self, query: PageQuery) -> Result<Page<Prize>, CatalogError> {
        self.simulate_latency().await;

        let prizes = self.prizes.read().await;
        let mut filtered: Vec<&Prize> = prizes.iter().filter(|p| matches(p, &query)).collect();
        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));

        let total_count = filtered.len();
        let offset = query.page.saturating_sub(1) * query.page_size;
        let rows: Vec<Prize> = filtered
            .into_iter()
            .skip(offset)
            .take(query.page_size)
            .cloned()
            .collect();

        log::debug!(
            "Fetched page {} ({} rows of {}) with filters {:?}",
            query.page,
            rows.len(),
            total_count,
            query.filters
        );

        Ok(Page {
            rows,
            total_count,
            page_count: page_count(total_count, query.page_size),
        })
    }

    async fn categories(&self) -> Result<Vec<SelectOption>, CatalogError> {
        self.simulate_latency().await;

        let prizes = self.prizes.read().await;
        let mut categories: Vec<&str> = prizes.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        Ok(categories.into_iter().map(|c| SelectOption::new(c, c)).collect())
    }

    async fn bulk_action(&self, action_id: &str, ids: &[String]) -> Result<usize, CatalogError> {
        self.simulate_latency().await;

        let mut prizes = self.prizes.write().await;
        // Validate every id before touching anything so a failed action
        // leaves the catalog unchanged
        let indexes = ids
            .iter()
            .map(|id| find_index(&prizes, id))
            .collect::<Result<Vec<_>, _>>()?;

        match action_id {
            "archive" => {
                for &index in &indexes {
                    prizes[index].status = PrizeStatus::Archived;
                }
            }
            "delete" => {
                for &index in &indexes {
                    deletable(&prizes[index])?;
                }
                prizes.retain(|p| !ids.contains(&p.id.to_string()));
            }
            other => return Err(CatalogError::UnknownAction(other.to_string())),
        }

        log::info!("Bulk action '{}' applied to {} prizes", action_id, indexes.len());
        Ok(indexes.len())
    }

    async fn row_action(&self, action_id: &str, id: &str) -> Result<(), CatalogError> {
        self.simulate_latency().await;

        let mut prizes = self.prizes.write().await;
        let index = find_index(&prizes, id)?;

        match action_id {
            "restock" => {
                let prize = &mut prizes[index];
                if prize.status == PrizeStatus::Archived {
                    return Err(CatalogError::Rejected {
                        id: id.to_string(),
                        reason: "archived prizes cannot be restocked".to_string(),
                    });
                }
                prize.stock += RESTOCK_AMOUNT;
                prize.status = PrizeStatus::Active;
            }
            "archive" => prizes[index].status = PrizeStatus::Archived,
            "restore" => {
                let prize = &mut prizes[index];
                prize.status = if prize.stock > 0 {
                    PrizeStatus::Active
                } else {
                    PrizeStatus::OutOfStock
                };
            }
            "delete" => {
                deletable(&prizes[index])?;
                prizes.remove(index);
            }
            other => return Err(CatalogError::UnknownAction(other.to_string())),
        }

        log::info!("Row action '{}' applied to prize {}", action_id, id);
        Ok(())
    }
}
