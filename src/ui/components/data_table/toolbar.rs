//! Filter toolbar.
//!
//! Every change is reported as the complete next [`FilterValueMap`]: the
//! current values with one key overwritten. Cleared filters are stored as the
//! empty string, which downstream query builders read as unset.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::config::{DynamicFilterOptions, FilterConfig, FilterKind, FilterValueMap, SelectOption, ToolbarAction};
use crate::constants::{CLEAR_ICON, SEARCH_ICON, SELECT_ALL_LABEL, TOOLBAR_HEIGHT};

/// A choice in a select filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectChoice {
    /// The "all" entry; clears the filter
    All,
    Value(String),
}

impl SelectChoice {
    /// Value sent to the host. "All" is the empty string, never `"all"`.
    pub fn wire_value(&self) -> String {
        match self {
            Self::All => String::new(),
            Self::Value(value) => value.clone(),
        }
    }
}

/// The toolbar draws nothing when there is neither a filter nor an action
pub fn is_visible(filters: &[FilterConfig], toolbar_actions: &[ToolbarAction]) -> bool {
    !filters.is_empty() || !toolbar_actions.is_empty()
}

/// Rows the toolbar occupies
pub fn height(filters: &[FilterConfig], toolbar_actions: &[ToolbarAction]) -> u16 {
    if is_visible(filters, toolbar_actions) {
        TOOLBAR_HEIGHT
    } else {
        0
    }
}

/// Copy of `values` with `id` set to `value`
pub fn with_value(values: &FilterValueMap, id: &str, value: impl Into<String>) -> FilterValueMap {
    let mut next = values.clone();
    next.insert(id.to_string(), value.into());
    next
}

/// Clearing a search sets it to the empty string
pub fn clear_search(values: &FilterValueMap, id: &str) -> FilterValueMap {
    with_value(values, id, "")
}

pub fn select(values: &FilterValueMap, id: &str, choice: &SelectChoice) -> FilterValueMap {
    with_value(values, id, choice.wire_value())
}

/// The clear affordance is offered only for a non-empty value
pub fn shows_clear(values: &FilterValueMap, id: &str) -> bool {
    values.get(id).is_some_and(|v| !v.is_empty())
}

/// Options of a select filter; dynamic filters read them from `dynamic`
/// and have none when the host supplied nothing
pub fn options_for<'a>(filter: &'a FilterConfig, dynamic: &'a DynamicFilterOptions) -> &'a [SelectOption] {
    match &filter.kind {
        FilterKind::Select { dynamic: true, .. } => dynamic.get(&filter.id).map(Vec::as_slice).unwrap_or(&[]),
        FilterKind::Select { options, .. } => options,
        _ => &[],
    }
}

/// All choices of a select in display order, "all" first
pub fn choices(options: &[SelectOption]) -> Vec<SelectChoice> {
    std::iter::once(SelectChoice::All)
        .chain(options.iter().map(|o| SelectChoice::Value(o.value.clone())))
        .collect()
}

/// Choice after (or before) the current one, wrapping around
pub fn cycle_choice(options: &[SelectOption], current: Option<&str>, forward: bool) -> SelectChoice {
    let all = choices(options);
    let position = match current {
        None | Some("") => 0,
        Some(value) => options.iter().position(|o| o.value == value).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (position + 1) % all.len()
    } else {
        (position + all.len() - 1) % all.len()
    };
    all[next].clone()
}

/// Label shown for a select's current value
pub fn select_label(filter: &FilterConfig, options: &[SelectOption], current: Option<&str>) -> String {
    match current {
        None | Some("") => {
            if filter.placeholder.is_empty() {
                SELECT_ALL_LABEL.to_string()
            } else {
                filter.placeholder.clone()
            }
        }
        Some(value) => options
            .iter()
            .find(|o| o.value == value)
            .map_or_else(|| value.to_string(), |o| o.label.clone()),
    }
}

/// Result of a key handled by the toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarOutcome {
    Ignored,
    Consumed,
    Changed(FilterValueMap),
}

/// Focus and edit state of the toolbar
#[derive(Debug, Default)]
pub struct Toolbar {
    /// Index into the rendered filters
    focus: Option<usize>,
    editing: bool,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Typing goes to the focused search field
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn blur(&mut self) {
        self.focus = None;
        self.editing = false;
    }

    /// Focus the first search filter and start editing it
    pub fn focus_search(&mut self, filters: &[FilterConfig]) -> bool {
        let index = rendered(filters).position(|f| f.kind == FilterKind::Search);
        self.focus = index;
        self.editing = index.is_some();
        index.is_some()
    }

    /// Move focus to the next rendered filter; past the last one the toolbar
    /// releases focus
    pub fn focus_next(&mut self, filters: &[FilterConfig]) {
        let count = rendered(filters).count();
        self.editing = false;
        self.focus = match self.focus {
            None if count > 0 => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            _ => None,
        };
        if let Some(filter) = self.focused(filters) {
            self.editing = filter.kind == FilterKind::Search;
        }
    }

    fn focused<'a>(&self, filters: &'a [FilterConfig]) -> Option<&'a FilterConfig> {
        self.focus.and_then(|i| rendered(filters).nth(i))
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        filters: &[FilterConfig],
        values: &FilterValueMap,
        dynamic: &DynamicFilterOptions,
    ) -> ToolbarOutcome {
        let Some(filter) = self.focused(filters) else {
            return ToolbarOutcome::Ignored;
        };

        match (&filter.kind, key.code) {
            (_, KeyCode::Esc) => {
                self.blur();
                ToolbarOutcome::Consumed
            }
            (_, KeyCode::Tab) => {
                self.focus_next(filters);
                ToolbarOutcome::Consumed
            }
            (FilterKind::Search, KeyCode::Enter) => {
                self.editing = false;
                ToolbarOutcome::Consumed
            }
            (FilterKind::Search, KeyCode::Char('u')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ToolbarOutcome::Changed(clear_search(values, &filter.id))
            }
            (FilterKind::Search, KeyCode::Char(c))
                if self.editing && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut text = values.get(&filter.id).cloned().unwrap_or_default();
                text.push(c);
                ToolbarOutcome::Changed(with_value(values, &filter.id, text))
            }
            (FilterKind::Search, KeyCode::Backspace) if self.editing => {
                let mut text = values.get(&filter.id).cloned().unwrap_or_default();
                if text.pop().is_none() {
                    return ToolbarOutcome::Consumed;
                }
                ToolbarOutcome::Changed(with_value(values, &filter.id, text))
            }
            (FilterKind::Select { .. }, KeyCode::Left | KeyCode::Right) => {
                let options = options_for(filter, dynamic);
                let choice = cycle_choice(
                    options,
                    values.get(&filter.id).map(String::as_str),
                    key.code == KeyCode::Right,
                );
                ToolbarOutcome::Changed(select(values, &filter.id, &choice))
            }
            (FilterKind::Select { .. }, KeyCode::Backspace) => {
                ToolbarOutcome::Changed(select(values, &filter.id, &SelectChoice::All))
            }
            _ if self.editing => ToolbarOutcome::Consumed,
            _ => ToolbarOutcome::Ignored,
        }
    }

    /// Draw the toolbar. Nothing is drawn when [`is_visible`] is false.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        filters: &[FilterConfig],
        toolbar_actions: &[ToolbarAction],
        values: &FilterValueMap,
        dynamic: &DynamicFilterOptions,
    ) {
        if !is_visible(filters, toolbar_actions) || area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (index, filter) in rendered(filters).enumerate() {
            let focused = self.focus == Some(index);
            let frame_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }

            let current = values.get(&filter.id).map(String::as_str);
            match &filter.kind {
                FilterKind::Search => {
                    spans.push(Span::styled(format!("{SEARCH_ICON} "), frame_style));
                    match current {
                        Some(text) if !text.is_empty() => {
                            spans.push(Span::styled(text.to_string(), Style::default().fg(Color::White)));
                        }
                        _ => spans.push(Span::styled(
                            filter.placeholder.clone(),
                            Style::default().fg(Color::DarkGray),
                        )),
                    }
                    if focused && self.editing {
                        spans.push(Span::styled("█", Style::default().fg(Color::White)));
                    }
                    if shows_clear(values, &filter.id) {
                        spans.push(Span::styled(format!(" {CLEAR_ICON}"), Style::default().fg(Color::Red)));
                    }
                }
                FilterKind::Select { .. } => {
                    let options = options_for(filter, dynamic);
                    spans.push(Span::styled("[", frame_style));
                    spans.push(Span::styled(
                        select_label(filter, options, current),
                        Style::default().fg(Color::White),
                    ));
                    spans.push(Span::styled(" ▾]", frame_style));
                }
                FilterKind::DateRange | FilterKind::MultiSelect => {}
            }
        }

        for action in toolbar_actions {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                action.key.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", action.label), Style::default().fg(Color::Gray)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

fn rendered(filters: &[FilterConfig]) -> impl Iterator<Item = &FilterConfig> {
    filters.iter().filter(|f| f.is_rendered())
}
