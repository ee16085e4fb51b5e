//! Table core: column construction, selection, body mode and the row actions
//! dropdown.
//!
//! The table holds only interaction state (selection, cursor, open menu,
//! toolbar focus, animation). Everything it draws comes from [`TableProps`],
//! recomputed on every frame.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};
use serde::Serialize;

use super::bulk_actions::{self, BulkActionsBar};
use super::columns::render_cell;
use super::config::{ActionConfig, ActionVariant, ColumnType, DynamicFilterOptions, FilterValueMap, RowIdFn, TableConfig};
use super::pagination::{step_page_size, NavButton, PaginationFooter, PaginationState};
use super::render_mode::RenderMode;
use super::selection::{HeaderCheckbox, RowSelection};
use super::toolbar::{self, Toolbar, ToolbarOutcome};
use super::trail::{Reveal, RowTrail};
use crate::constants::{
    ACTIONS_COLUMN_WIDTH, ACTIONS_MENU_WIDTH, ACTIONS_TRIGGER, BULK_BAR_HEIGHT, CHECKBOX_CHECKED, CHECKBOX_UNCHECKED,
    PAGINATION_HEIGHT, SELECTION_COLUMN_WIDTH, SKELETON_CELL, SKELETON_HEADER_CELL,
};
use crate::ui::core::TableAction;
use crate::ui::layout::LayoutManager;

/// Everything the host passes to the table on each frame
#[derive(Debug)]
pub struct TableProps<'a, T> {
    /// Exactly one page of rows; the table never slices it
    pub data: &'a [T],
    pub is_loading: bool,
    pub is_fetching: bool,
    pub total_count: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub filters: &'a FilterValueMap,
    pub dynamic_filter_options: &'a DynamicFilterOptions,
    /// A bulk action is in flight; bulk buttons are disabled
    pub bulk_pending: bool,
}

impl<'a, T> TableProps<'a, T> {
    /// Props for a single page holding all of `data`
    pub fn new(data: &'a [T], filters: &'a FilterValueMap, dynamic_filter_options: &'a DynamicFilterOptions) -> Self {
        Self {
            data,
            is_loading: false,
            is_fetching: false,
            total_count: data.len(),
            page_count: 1,
            current_page: 1,
            page_size: data.len().max(1),
            filters,
            dynamic_filter_options,
            bulk_pending: false,
        }
    }

    pub fn mode(&self) -> RenderMode {
        RenderMode::derive(self.is_loading, self.is_fetching, self.data.len())
    }
}

/// A built table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Selection,
    /// Index into `TableConfig::columns`
    Data(usize),
    Actions,
}

/// Selection column first when selectable, then configured columns in order.
/// Configured `Selection` entries are skipped. The actions dropdown sits where
/// an `Actions` entry is declared, or last when only row actions are given.
pub fn build_columns<T>(config: &TableConfig<T>) -> Vec<TableColumn> {
    let mut columns = Vec::with_capacity(config.columns.len() + 2);
    if config.selectable {
        columns.push(TableColumn::Selection);
    }

    let mut has_actions = false;
    for (index, column) in config.columns.iter().enumerate() {
        match column.column_type() {
            ColumnType::Selection => {}
            ColumnType::Actions if has_actions => {}
            ColumnType::Actions => {
                columns.push(TableColumn::Actions);
                has_actions = true;
            }
            _ => columns.push(TableColumn::Data(index)),
        }
    }

    if !has_actions && !config.actions.row.is_empty() {
        columns.push(TableColumn::Actions);
    }
    columns
}

/// Row actions whose condition accepts `row`, in config order
pub fn available_actions<'c, T>(actions: &'c [ActionConfig<T>], row: &T) -> Vec<&'c ActionConfig<T>> {
    actions.iter().filter(|action| action.is_available(row)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActionMenu {
    row_id: String,
    highlighted: usize,
}

/// Generic configuration-driven table
pub struct DataTable<T> {
    config: Arc<TableConfig<T>>,
    get_row_id: RowIdFn<T>,
    selection: RowSelection,
    /// Row id under the cursor
    cursor: Option<String>,
    menu: Option<ActionMenu>,
    toolbar: Toolbar,
    trail: RowTrail,
    spinner_frame: usize,
    table_state: TableState,
}

impl<T: Serialize + Clone> DataTable<T> {
    pub fn new(config: Arc<TableConfig<T>>, get_row_id: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            config,
            get_row_id: Arc::new(get_row_id),
            selection: RowSelection::new(),
            cursor: None,
            menu: None,
            toolbar: Toolbar::new(),
            trail: RowTrail::new(),
            spinner_frame: 0,
            table_state: TableState::default(),
        }
    }

    pub fn config(&self) -> &TableConfig<T> {
        &self.config
    }

    pub fn columns(&self) -> Vec<TableColumn> {
        build_columns(&self.config)
    }

    pub fn row_id(&self, row: &T) -> String {
        (self.get_row_id)(row)
    }

    /// Ids of the rows on the current page, in display order
    pub fn page_ids(&self, data: &[T]) -> Vec<String> {
        data.iter().map(|row| self.row_id(row)).collect()
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    /// Drop the whole selection. Hosts call this after a bulk action succeeds.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn header_checkbox(&self, data: &[T]) -> HeaderCheckbox {
        self.selection.header_state(&self.page_ids(data))
    }

    /// Header checkbox click; affects the current page only
    pub fn toggle_page_selection(&mut self, data: &[T]) {
        if !self.config.selectable {
            return;
        }
        let ids = self.page_ids(data);
        self.selection.toggle_page(&ids);
    }

    /// Forget one row, e.g. after the host deleted it
    pub fn deselect(&mut self, id: &str) {
        self.selection.deselect(id);
    }

    pub fn toggle_row_selection(&mut self, row: &T) {
        if !self.config.selectable {
            return;
        }
        let id = self.row_id(row);
        self.selection.toggle(&id);
    }

    /// Keys should go to the table before any global shortcut
    pub fn is_capturing_input(&self) -> bool {
        self.toolbar.is_editing() || self.menu.is_some()
    }

    /// Row id whose actions dropdown is open
    pub fn open_menu(&self) -> Option<&str> {
        self.menu.as_ref().map(|menu| menu.row_id.as_str())
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Advance row animation and the pending spinner
    pub fn tick(&mut self) {
        self.trail.advance();
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn is_animating(&self) -> bool {
        self.config.animation && !self.trail.is_settled()
    }

    pub fn pagination_state(&self, props: &TableProps<'_, T>) -> PaginationState {
        PaginationState {
            total_count: props.total_count,
            page_count: props.page_count,
            current_page: props.current_page,
            page_size: props.page_size,
            selected_count: self.selection.len(),
        }
    }

    fn cursor_index(&self, data: &[T]) -> Option<usize> {
        if data.is_empty() {
            return None;
        }
        let index = self
            .cursor
            .as_deref()
            .and_then(|id| data.iter().position(|row| self.row_id(row) == id))
            .unwrap_or(0);
        Some(index)
    }

    fn move_cursor(&mut self, data: &[T], down: bool) {
        let Some(index) = self.cursor_index(data) else {
            return;
        };
        let next = if down {
            (index + 1).min(data.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.cursor = Some(self.row_id(&data[next]));
    }

    fn cursor_row<'d>(&self, data: &'d [T]) -> Option<&'d T> {
        self.cursor_index(data).map(|index| &data[index])
    }

    fn menu_row<'d>(&self, data: &'d [T]) -> Option<&'d T> {
        let menu = self.menu.as_ref()?;
        data.iter().find(|row| self.row_id(row) == menu.row_id)
    }

    /// Open the actions dropdown of the row under the cursor
    pub fn open_actions_menu(&mut self, data: &[T]) -> bool {
        let Some(row) = self.cursor_row(data) else {
            return false;
        };
        if available_actions(&self.config.actions.row, row).is_empty() {
            return false;
        }
        self.menu = Some(ActionMenu {
            row_id: self.row_id(row),
            highlighted: 0,
        });
        true
    }

    pub fn handle_key_events(&mut self, key: KeyEvent, props: &TableProps<'_, T>) -> TableAction<T> {
        let config = Arc::clone(&self.config);
        let mode = props.mode();

        if self.menu.is_some() {
            return self.handle_menu_key(key, props.data, mode);
        }

        if self.toolbar.is_focused() {
            match self
                .toolbar
                .handle_key(key, &config.filters, props.filters, props.dynamic_filter_options)
            {
                ToolbarOutcome::Changed(next) => return TableAction::FiltersChange(next),
                ToolbarOutcome::Consumed => return TableAction::None,
                ToolbarOutcome::Ignored => {}
            }
        }

        let pagination = self.pagination_state(props);
        let go = |button: NavButton| pagination.target(button).map_or(TableAction::None, TableAction::PageChange);

        match key.code {
            KeyCode::Char('/') => {
                self.toolbar.focus_search(&config.filters);
                TableAction::None
            }
            KeyCode::Tab if toolbar::is_visible(&config.filters, &config.actions.toolbar) => {
                self.toolbar.focus_next(&config.filters);
                TableAction::None
            }
            KeyCode::Down | KeyCode::Char('j') if mode.is_interactive() => {
                self.move_cursor(props.data, true);
                TableAction::None
            }
            KeyCode::Up | KeyCode::Char('k') if mode.is_interactive() => {
                self.move_cursor(props.data, false);
                TableAction::None
            }
            KeyCode::Char(' ') if mode.is_interactive() => {
                if let Some(row) = self.cursor_row(props.data) {
                    self.toggle_row_selection(row);
                }
                TableAction::None
            }
            KeyCode::Char('a') if mode.is_interactive() && config.selectable => {
                self.toggle_page_selection(props.data);
                TableAction::None
            }
            KeyCode::Enter if mode == RenderMode::Empty => config
                .empty_state
                .action
                .as_ref()
                .map_or(TableAction::None, |action| TableAction::EmptyStateAction(action.id.clone())),
            KeyCode::Enter | KeyCode::Char('.') if mode.is_interactive() => {
                self.open_actions_menu(props.data);
                TableAction::None
            }
            KeyCode::Char('n') | KeyCode::Right => go(NavButton::Next),
            KeyCode::Char('p') | KeyCode::Left => go(NavButton::Previous),
            KeyCode::Char('g') => go(NavButton::First),
            KeyCode::Char('G') => go(NavButton::Last),
            KeyCode::Char('+') | KeyCode::Char('-') => {
                step_page_size(
                    &config.pagination.page_size_options,
                    props.page_size,
                    key.code == KeyCode::Char('+'),
                )
                .map_or(TableAction::None, TableAction::PageSizeChange)
            }
            KeyCode::Char('x') => {
                self.clear_selection();
                TableAction::None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                bulk_actions::request(&config.actions.bulk, index, &self.selection, props.bulk_pending)
                    .map_or(TableAction::None, |request| TableAction::BulkAction {
                        action_id: request.action_id,
                        row_ids: request.row_ids,
                    })
            }
            KeyCode::Char(c) => config
                .actions
                .toolbar
                .iter()
                .find(|action| action.key == c)
                .map_or(TableAction::None, |action| TableAction::ToolbarAction(action.id.clone())),
            _ => TableAction::None,
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, data: &[T], mode: RenderMode) -> TableAction<T> {
        let config = Arc::clone(&self.config);
        let row = match (mode.is_interactive(), self.menu_row(data)) {
            (true, Some(row)) => row,
            _ => {
                self.menu = None;
                return TableAction::None;
            }
        };
        let actions = available_actions(&config.actions.row, row);
        if actions.is_empty() {
            self.menu = None;
            return TableAction::None;
        }
        let Some(menu) = self.menu.as_mut() else {
            return TableAction::None;
        };
        menu.highlighted = menu.highlighted.min(actions.len() - 1);

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                menu.highlighted = (menu.highlighted + 1).min(actions.len() - 1);
                TableAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                menu.highlighted = menu.highlighted.saturating_sub(1);
                TableAction::None
            }
            KeyCode::Enter => {
                let action_id = actions[menu.highlighted].id.clone();
                self.menu = None;
                TableAction::RowAction {
                    action_id,
                    row: row.clone(),
                }
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('.') => {
                self.menu = None;
                TableAction::None
            }
            _ => TableAction::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, props: &TableProps<'_, T>) {
        let config = Arc::clone(&self.config);
        let mode = props.mode();

        let bulk_visible = bulk_actions::is_visible(self.selection.len(), &config.actions.bulk);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(toolbar::height(&config.filters, &config.actions.toolbar)),
                Constraint::Length(if bulk_visible { BULK_BAR_HEIGHT } else { 0 }),
                Constraint::Min(3),
                Constraint::Length(PAGINATION_HEIGHT),
            ])
            .split(area);

        self.toolbar.render(
            f,
            chunks[0],
            &config.filters,
            &config.actions.toolbar,
            props.filters,
            props.dynamic_filter_options,
        );
        BulkActionsBar::render(
            f,
            chunks[1],
            self.selection.len(),
            &config.actions.bulk,
            props.bulk_pending,
            self.spinner_frame,
        );
        self.render_table(f, chunks[2], props, mode);
        PaginationFooter::render(f, chunks[3], &self.pagination_state(props));
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect, props: &TableProps<'_, T>, mode: RenderMode) {
        let config = Arc::clone(&self.config);
        let columns = build_columns(&config);
        let widths: Vec<Constraint> = columns
            .iter()
            .map(|column| match column {
                TableColumn::Selection => Constraint::Length(SELECTION_COLUMN_WIDTH),
                TableColumn::Actions => Constraint::Length(ACTIONS_COLUMN_WIDTH),
                TableColumn::Data(index) => config.columns[*index]
                    .width
                    .map_or(Constraint::Fill(1), Constraint::Length),
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Gray));

        let header = if mode.shows_real_header() {
            self.header_row(&columns, props.data)
        } else {
            skeleton_row(columns.len(), SKELETON_HEADER_CELL, Style::default().fg(Color::DarkGray))
        };

        if let Some(count) = mode.skeleton_rows(props.page_size) {
            let mut style = Style::default().fg(Color::DarkGray);
            if mode == RenderMode::Refetching {
                style = style.add_modifier(Modifier::DIM);
            }
            let rows = (0..count).map(|_| skeleton_row(columns.len(), SKELETON_CELL, style));
            self.menu = None;
            self.table_state.select(None);
            f.render_stateful_widget(
                Table::new(rows, widths).header(header).block(block),
                area,
                &mut self.table_state,
            );
            return;
        }

        if mode == RenderMode::Empty {
            self.menu = None;
            self.table_state.select(None);
            let inner = block.inner(area);
            f.render_widget(Table::new(Vec::<Row>::new(), widths).header(header).block(block), area);
            let body = Rect {
                y: inner.y.saturating_add(1),
                height: inner.height.saturating_sub(1),
                ..inner
            };
            self.render_empty_state(f, body);
            return;
        }

        let ids = self.page_ids(props.data);
        if config.animation {
            self.trail.observe(&ids);
        }
        let cursor_index = self.cursor_index(props.data);
        self.cursor = cursor_index.map(|index| ids[index].clone());
        if self.menu_row(props.data).is_none() {
            self.menu = None;
        }

        let rows: Vec<Row> = props
            .data
            .iter()
            .zip(&ids)
            .map(|(row, id)| {
                let reveal = if config.animation { self.trail.reveal(id) } else { Reveal::Shown };
                self.body_row(&columns, row, id, reveal)
            })
            .collect();

        self.table_state.select(cursor_index);
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(table, area, &mut self.table_state);

        if let Some(menu) = &self.menu {
            let menu_index = ids.iter().position(|id| *id == menu.row_id);
            if let (Some(index), Some(row)) = (menu_index, self.menu_row(props.data)) {
                let visual_row = index.saturating_sub(self.table_state.offset()) as u16;
                self.render_actions_menu(f, area, visual_row, row, menu.highlighted);
            }
        }
    }

    fn header_row(&self, columns: &[TableColumn], data: &[T]) -> Row<'static> {
        let cells = columns.iter().map(|column| match column {
            TableColumn::Selection => Cell::from(self.header_checkbox(data).symbol()),
            TableColumn::Data(index) => Cell::from(self.config.columns[*index].header.clone()),
            TableColumn::Actions => Cell::from(""),
        });
        Row::new(cells).style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    }

    fn body_row(&self, columns: &[TableColumn], row: &T, id: &str, reveal: Reveal) -> Row<'static> {
        if reveal == Reveal::Hidden {
            return Row::new(columns.iter().map(|_| Cell::from("")));
        }

        let cells = columns.iter().map(|column| match column {
            TableColumn::Selection => {
                let symbol = if self.selection.is_selected(id) {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_UNCHECKED
                };
                Cell::from(symbol)
            }
            TableColumn::Data(index) => render_cell(row, &self.config.columns[*index])
                .map(Cell::from)
                .unwrap_or_default(),
            TableColumn::Actions => {
                if available_actions(&self.config.actions.row, row).is_empty() {
                    Cell::from("")
                } else {
                    Cell::from(ACTIONS_TRIGGER)
                }
            }
        });

        let mut style = Style::default().fg(Color::White);
        if self.selection.is_selected(id) {
            style = style.fg(Color::Cyan);
        }
        if reveal == Reveal::Entering {
            style = style.add_modifier(Modifier::DIM);
        }
        Row::new(cells).style(style)
    }

    fn render_empty_state(&self, f: &mut Frame, area: Rect) {
        let empty = &self.config.empty_state;
        let mut lines = vec![
            Line::from(Span::styled(empty.icon.clone(), Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                empty.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ];
        if !empty.description.is_empty() {
            lines.push(Line::from(Span::styled(
                empty.description.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        if let Some(action) = &empty.action {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", action.label), Style::default().fg(Color::Gray)),
            ]));
        }
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_actions_menu(&self, f: &mut Frame, table_area: Rect, visual_row: u16, row: &T, highlighted: usize) {
        let actions = available_actions(&self.config.actions.row, row);
        let mut lines = Vec::new();
        for (index, action) in actions.iter().enumerate() {
            if action.separator && index > 0 {
                lines.push(Line::from(Span::styled(
                    "─".repeat(usize::from(ACTIONS_MENU_WIDTH.saturating_sub(2))),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            let mut style = match action.variant {
                ActionVariant::Destructive => Style::default().fg(Color::Red),
                ActionVariant::Default => Style::default().fg(Color::White),
            };
            let marker = if index == highlighted {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                "▶ "
            } else {
                "  "
            };
            let label = match &action.icon {
                Some(icon) => format!("{marker}{icon} {}", action.label),
                None => format!("{marker}{}", action.label),
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        // border + header rows sit above the first body row
        let anchor = Rect::new(
            table_area.x,
            table_area.y + 2 + visual_row,
            table_area.width.saturating_sub(1),
            1,
        );
        let menu_area = LayoutManager::dropdown_rect(anchor, ACTIONS_MENU_WIDTH, lines.len() as u16 + 2, table_area);

        f.render_widget(Clear, menu_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Actions ")
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(Paragraph::new(lines).block(block), menu_area);
    }
}

fn skeleton_row(cells: usize, symbol: &'static str, style: Style) -> Row<'static> {
    Row::new((0..cells).map(|_| Cell::from(symbol))).style(style)
}
