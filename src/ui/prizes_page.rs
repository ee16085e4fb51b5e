//! Table configuration of the prizes admin page.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use serde_json::Value;

use crate::catalog::{Prize, PrizeStatus, FILTER_CATEGORY, FILTER_SEARCH, FILTER_STATUS};
use crate::config::Config;
use crate::ui::components::badge::BadgeVariant;
use crate::ui::components::data_table::{
    Accessor, ActionConfig, BadgeMapping, BulkActionConfig, ColumnConfig, ColumnKind, EmptyState, EmptyStateAction,
    FilterConfig, PaginationConfig, SelectOption, TableConfig, ToolbarAction,
};

pub const ACTION_RESTOCK: &str = "restock";
pub const ACTION_ARCHIVE: &str = "archive";
pub const ACTION_RESTORE: &str = "restore";
pub const ACTION_DELETE: &str = "delete";
pub const TOOLBAR_RELOAD: &str = "reload";
pub const EMPTY_CLEAR_FILTERS: &str = "clear-filters";

/// Row identity used by the prizes table
pub fn prize_row_id(prize: &Prize) -> String {
    prize.id.to_string()
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(PrizeStatus::Active.as_str(), "Active"),
        SelectOption::new(PrizeStatus::OutOfStock.as_str(), "Out of stock"),
        SelectOption::new(PrizeStatus::Archived.as_str(), "Archived"),
    ]
}

fn stock_cell(prize: &Prize) -> Line<'static> {
    let color = match prize.stock {
        0 => Color::Red,
        1..=5 => Color::LightYellow,
        _ => Color::Green,
    };
    Line::from(Span::styled(prize.stock.to_string(), Style::default().fg(color)))
}

pub fn prize_table_config(config: &Config) -> TableConfig<Prize> {
    let columns = vec![
        ColumnConfig::new(
            "name",
            "Prize",
            ColumnKind::String {
                value: Accessor::path("name"),
                fallback: None,
                max_width: Some(28),
            },
        ),
        ColumnConfig::new(
            "url",
            "Link",
            ColumnKind::Link {
                label: Accessor::path("url"),
                href: None,
            },
        )
        .width(14),
        ColumnConfig::relation("company", "Company", "company.name", "Platform").width(12),
        ColumnConfig::badge(
            "status",
            "Status",
            "status",
            vec![
                BadgeMapping::new(PrizeStatus::Active.as_str(), "Active", BadgeVariant::Success),
                BadgeMapping::new(PrizeStatus::OutOfStock.as_str(), "Out of stock", BadgeVariant::Warning),
                BadgeMapping::new(PrizeStatus::Archived.as_str(), "Archived", BadgeVariant::Secondary),
            ],
        )
        .width(16),
        ColumnConfig::number("cost", "Cost", "cost_coins", config.display.coin_format()).width(14),
        ColumnConfig::custom("stock", "Stock", stock_cell).width(6),
        ColumnConfig::new(
            "created_by",
            "Created by",
            ColumnKind::Avatar {
                name: Accessor::path("created_by"),
                subtitle: None,
            },
        )
        .width(20),
        ColumnConfig::date("created_at", "Created", "created_at", &config.display.date_format).width(11),
        ColumnConfig::new(
            "category",
            "Category",
            ColumnKind::String {
                value: Accessor::with(|p: &Prize| Some(Value::String(p.category.replace('-', " ")))),
                fallback: Some("-".to_string()),
                max_width: None,
            },
        )
        .width(12),
        ColumnConfig::new("actions", "", ColumnKind::Actions),
    ];

    TableConfig::new(columns)
        .selectable(true)
        .filters(vec![
            FilterConfig::search(FILTER_SEARCH, "Search prizes or companies"),
            FilterConfig::select(FILTER_STATUS, "All statuses", status_options()),
            FilterConfig::dynamic_select(FILTER_CATEGORY, "All categories"),
        ])
        .row_actions(vec![
            ActionConfig::new(ACTION_RESTOCK, format!("Restock (+{})", crate::catalog::memory::RESTOCK_AMOUNT))
                .icon("+")
                .when(|p: &Prize| p.status != PrizeStatus::Archived),
            ActionConfig::new(ACTION_ARCHIVE, "Archive")
                .icon("▣")
                .when(|p: &Prize| p.status != PrizeStatus::Archived),
            ActionConfig::new(ACTION_RESTORE, "Restore")
                .icon("↺")
                .when(|p: &Prize| p.status == PrizeStatus::Archived),
            ActionConfig::new(ACTION_DELETE, "Delete")
                .icon("✕")
                .destructive()
                .separated()
                .when(|p: &Prize| p.status != PrizeStatus::Active || p.stock == 0),
        ])
        .bulk_actions(vec![
            BulkActionConfig::new(ACTION_ARCHIVE, "Archive").icon("▣"),
            BulkActionConfig::new(ACTION_DELETE, "Delete").icon("✕").destructive(),
        ])
        .toolbar_actions(vec![ToolbarAction::new(TOOLBAR_RELOAD, "Reload", 'r')])
        .pagination(PaginationConfig {
            default_page_size: config.ui.page_size,
            page_size_options: config.ui.page_size_options.clone(),
        })
        .empty_state(EmptyState {
            icon: "🎁".to_string(),
            title: "No prizes found".to_string(),
            description: "Try a different search or clear the filters.".to_string(),
            action: Some(EmptyStateAction {
                id: EMPTY_CLEAR_FILTERS.to_string(),
                label: "Clear filters".to_string(),
            }),
        })
        .animation(config.ui.animation)
}
