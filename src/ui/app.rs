//! Host page: owns the prizes table, its page state and the background work
//! behind it.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use super::components::data_table::{DynamicFilterOptions, FilterValueMap, TableConfig, TableProps};
use super::components::{DataTable, HelpPanel, LogsPanel, StatusBar};
use super::core::{Action, Component, TableAction, TaskManager};
use super::layout::LayoutManager;
use super::prizes_page::{self, prize_row_id, EMPTY_CLEAR_FILTERS, TOOLBAR_RELOAD};
use crate::catalog::{PageQuery, PageSource, Prize, FILTER_CATEGORY};
use crate::config::Config;
use crate::constants::{
    ERROR_BULK_FAILED, ERROR_FETCH_FAILED, ERROR_ROW_ACTION_FAILED, SUCCESS_BULK_ARCHIVED, SUCCESS_BULK_DELETED,
    SUCCESS_PRIZE_UPDATED,
};
use crate::logger::LogBuffer;

/// Page state handed to the table as props
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub rows: Vec<Prize>,
    pub total_count: usize,
    pub page_count: usize,
    /// One-based
    pub current_page: usize,
    pub page_size: usize,
    pub filters: FilterValueMap,
    pub dynamic_filter_options: DynamicFilterOptions,
    /// No page has arrived yet
    pub is_loading: bool,
    pub is_fetching: bool,
    pub bulk_pending: bool,
    /// Sequence number of the latest page request
    pub request_seq: u64,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
    pub show_logs: bool,
    pub logs_scroll_offset: usize,
}

impl AppState {
    fn new(page_size: usize) -> Self {
        Self {
            page_count: 1,
            current_page: 1,
            page_size,
            is_loading: true,
            ..Default::default()
        }
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.current_page, self.page_size, self.filters.clone())
    }
}

pub struct App {
    table: DataTable<Prize>,
    state: AppState,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    log_buffer: LogBuffer,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, source: Arc<dyn PageSource<Prize>>, log_buffer: LogBuffer) -> anyhow::Result<Self> {
        Self::with_table_config(prizes_page::prize_table_config(config), source, log_buffer)
    }

    pub fn with_table_config(
        table_config: TableConfig<Prize>,
        source: Arc<dyn PageSource<Prize>>,
        log_buffer: LogBuffer,
    ) -> anyhow::Result<Self> {
        table_config.validate()?;
        let state = AppState::new(table_config.pagination.default_page_size);
        let table = DataTable::new(Arc::new(table_config), prize_row_id);
        let (task_manager, background_action_rx) = TaskManager::new(source);

        Ok(Self {
            table,
            state,
            task_manager,
            background_action_rx,
            log_buffer,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn table(&self) -> &DataTable<Prize> {
        &self.table
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn running_tasks(&self) -> usize {
        self.task_manager.running_tasks()
    }

    /// Kick off the first page and the category options
    pub fn start(&mut self) {
        log::info!("Loading prizes page");
        self.task_manager.spawn_load_categories();
        self.fetch_page();
    }

    fn fetch_page(&mut self) {
        self.state.request_seq += 1;
        self.state.is_fetching = true;
        let query = self.state.query();
        log::debug!(
            "Requesting page {} (size {}) with filters {:?}",
            query.page,
            query.page_size,
            query.filters
        );
        self.task_manager.spawn_fetch(self.state.request_seq, query);
    }

    fn props(state: &AppState) -> TableProps<'_, Prize> {
        TableProps {
            data: &state.rows,
            is_loading: state.is_loading,
            is_fetching: state.is_fetching,
            total_count: state.total_count,
            page_count: state.page_count,
            current_page: state.current_page,
            page_size: state.page_size,
            filters: &state.filters,
            dynamic_filter_options: &state.dynamic_filter_options,
            bulk_pending: state.bulk_pending,
        }
    }

    /// Translate a table interaction into page state changes and background work
    pub fn handle_table_action(&mut self, action: TableAction<Prize>) -> Action {
        match action {
            TableAction::PageChange(page) => {
                log::debug!("Table: page {} requested", page);
                self.state.current_page = page;
                self.fetch_page();
                Action::None
            }
            TableAction::PageSizeChange(size) => {
                log::debug!("Table: page size {} requested", size);
                self.state.page_size = size;
                self.state.current_page = 1;
                self.fetch_page();
                Action::None
            }
            TableAction::FiltersChange(filters) => {
                log::debug!("Table: filters changed to {:?}", filters);
                self.state.filters = filters;
                self.state.current_page = 1;
                self.fetch_page();
                Action::None
            }
            TableAction::RowAction { action_id, row } => {
                log::info!("Row action '{}' on '{}'", action_id, row.name);
                self.state.clear_messages();
                self.task_manager.spawn_row_action(action_id, prize_row_id(&row));
                Action::None
            }
            TableAction::BulkAction { action_id, row_ids } => {
                log::info!("Bulk action '{}' on {} prizes", action_id, row_ids.len());
                self.state.clear_messages();
                self.state.bulk_pending = true;
                self.task_manager.spawn_bulk_action(action_id, row_ids);
                Action::None
            }
            TableAction::ToolbarAction(id) if id == TOOLBAR_RELOAD => Action::Reload,
            TableAction::EmptyStateAction(id) if id == EMPTY_CLEAR_FILTERS => {
                log::debug!("Clearing all filters");
                self.state.filters.clear();
                self.state.current_page = 1;
                self.fetch_page();
                Action::None
            }
            TableAction::ToolbarAction(id) | TableAction::EmptyStateAction(id) => {
                log::warn!("Unhandled table action '{}'", id);
                Action::None
            }
            TableAction::None => Action::None,
        }
    }

    /// Drain results sent back by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.task_manager.cleanup_finished_tasks();
        actions
    }

    /// Wait for the next background result
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') if !self.table.toolbar().is_focused() => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('L') => Some(Action::ToggleLogs),
            _ => None,
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> Action {
        let (offset, close) = if self.state.show_help {
            (&mut self.state.help_scroll_offset, matches!(key.code, KeyCode::Esc | KeyCode::Char('?')))
        } else {
            (&mut self.state.logs_scroll_offset, matches!(key.code, KeyCode::Esc | KeyCode::Char('L')))
        };
        match key.code {
            _ if close => {
                *offset = 0;
                if self.state.show_help {
                    Action::ToggleHelp
                } else {
                    Action::ToggleLogs
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                *offset = offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *offset = offset.saturating_add(1);
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                *offset = 0;
                Action::None
            }
            // Panels clamp the offset when they render
            KeyCode::End | KeyCode::Char('G') => {
                *offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for App {
    fn init(&mut self) -> anyhow::Result<()> {
        self.start();
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Quits from anywhere, including text input and overlays
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.state.show_help || self.state.show_logs {
            return self.handle_overlay_key(key);
        }

        if !self.table.is_capturing_input() {
            if let Some(action) = self.handle_global_key(key) {
                return action;
            }
        }

        let table_action = {
            let props = Self::props(&self.state);
            self.table.handle_key_events(key, &props)
        };
        self.handle_table_action(table_action)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Reload => {
                log::info!("Reloading prizes");
                self.state.clear_messages();
                self.task_manager.spawn_load_categories();
                self.fetch_page();
                Action::None
            }
            Action::PageLoaded { request, page } => {
                if request != self.state.request_seq {
                    log::debug!("Dropping stale page from request {}", request);
                    return Action::None;
                }
                log::debug!(
                    "Loaded {} of {} prizes ({} pages)",
                    page.rows.len(),
                    page.total_count,
                    page.page_count
                );
                self.state.is_loading = false;
                self.state.is_fetching = false;
                self.state.rows = page.rows;
                self.state.total_count = page.total_count;
                self.state.page_count = page.page_count;

                // Deletions can leave the current page past the end
                if self.state.current_page > page.page_count {
                    self.state.current_page = page.page_count;
                    self.fetch_page();
                }
                Action::None
            }
            Action::PageFailed { request, error } => {
                if request != self.state.request_seq {
                    return Action::None;
                }
                log::error!("Failed to load page: {}", error);
                self.state.is_loading = false;
                self.state.is_fetching = false;
                self.state.error_message = Some(format!("{}: {}", ERROR_FETCH_FAILED, error));
                Action::None
            }
            Action::CategoriesLoaded(options) => {
                log::debug!("Loaded {} category options", options.len());
                self.state
                    .dynamic_filter_options
                    .insert(FILTER_CATEGORY.to_string(), options);
                Action::None
            }
            Action::BulkCompleted { action_id, affected } => {
                log::info!("Bulk '{}' changed {} prizes", action_id, affected);
                self.state.bulk_pending = false;
                self.table.clear_selection();
                let message = if action_id == prizes_page::ACTION_DELETE {
                    SUCCESS_BULK_DELETED
                } else {
                    SUCCESS_BULK_ARCHIVED
                };
                self.state.info_message = Some(format!("{} ({})", message, affected));
                self.fetch_page();
                Action::None
            }
            Action::BulkFailed { action_id, error } => {
                log::error!("Bulk '{}' failed: {}", action_id, error);
                self.state.bulk_pending = false;
                self.state.error_message = Some(format!("{}: {}", ERROR_BULK_FAILED, error));
                Action::None
            }
            Action::RowActionCompleted { action_id, row_id } => {
                log::info!("Row action '{}' completed on {}", action_id, row_id);
                if action_id == prizes_page::ACTION_DELETE {
                    self.table.deselect(&row_id);
                }
                self.state.info_message = Some(SUCCESS_PRIZE_UPDATED.to_string());
                self.fetch_page();
                Action::None
            }
            Action::RowActionFailed { action_id, error } => {
                log::error!("Row action '{}' failed: {}", action_id, error);
                self.state.error_message = Some(format!("{}: {}", ERROR_ROW_ACTION_FAILED, error));
                Action::None
            }
            Action::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
                self.state.help_scroll_offset = 0;
                Action::None
            }
            Action::ToggleLogs => {
                self.state.show_logs = !self.state.show_logs;
                self.state.logs_scroll_offset = 0;
                Action::None
            }
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
                Action::Quit
            }
            Action::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        let props = Self::props(&self.state);
        self.table.render(f, chunks[0], &props);
        StatusBar::render(f, chunks[1], &self.state, self.task_manager.running_tasks());

        if self.state.show_help {
            HelpPanel::render(f, &mut self.state.help_scroll_offset);
        } else if self.state.show_logs {
            LogsPanel::render(f, rect, &self.log_buffer, &mut self.state.logs_scroll_offset);
        }
    }

    fn tick(&mut self) {
        self.table.tick();
    }
}
