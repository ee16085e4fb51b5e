//! Pagination footer.
//!
//! Pure display of server-side pagination state. The footer never changes
//! the current page on its own, not even when the page size changes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::PAGE_SIZE_LABEL;

/// One-based, inclusive row range shown on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

/// Rows covered by `current_page`, clamped by `total_count`
pub fn visible_range(current_page: usize, page_size: usize, total_count: usize) -> VisibleRange {
    let from = (current_page.saturating_sub(1) * page_size + 1).min(total_count);
    let to = (current_page * page_size).min(total_count);
    VisibleRange { from, to }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    First,
    Previous,
    Next,
    Last,
}

/// Enabled flags for the navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub total_count: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub selected_count: usize,
}

impl PaginationState {
    pub fn range(&self) -> VisibleRange {
        visible_range(self.current_page, self.page_size, self.total_count)
    }

    /// Selection count when anything is selected, otherwise the visible range
    pub fn label(&self) -> String {
        if self.selected_count > 0 {
            format!("{} of {} selected", self.selected_count, self.total_count)
        } else {
            let range = self.range();
            format!("Showing {} to {} of {}", range.from, range.to, self.total_count)
        }
    }

    pub fn nav(&self) -> NavState {
        let at_start = self.current_page <= 1;
        let at_end = self.current_page >= self.page_count;
        NavState {
            first: !at_start,
            previous: !at_start,
            next: !at_end,
            last: !at_end,
        }
    }

    /// Page a button leads to, `None` when the button is disabled
    pub fn target(&self, button: NavButton) -> Option<usize> {
        let nav = self.nav();
        match button {
            NavButton::First => nav.first.then_some(1),
            NavButton::Previous => nav.previous.then(|| self.current_page - 1),
            NavButton::Next => nav.next.then(|| self.current_page + 1),
            NavButton::Last => nav.last.then_some(self.page_count),
        }
    }
}

/// Neighbouring page size in `options`, `None` at either end
///
/// A current size missing from `options` moves to the nearest offered size in
/// the requested direction.
pub fn step_page_size(options: &[usize], current: usize, forward: bool) -> Option<usize> {
    if forward {
        options.iter().copied().filter(|&size| size > current).min()
    } else {
        options.iter().copied().filter(|&size| size < current).max()
    }
}

/// Pagination footer component
pub struct PaginationFooter;

impl PaginationFooter {
    pub fn render(f: &mut Frame, area: Rect, state: &PaginationState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(52)])
            .split(area);

        let label_style = if state.selected_count > 0 {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(Paragraph::new(Span::styled(state.label(), label_style)), chunks[0]);

        let nav = state.nav();
        let button = |symbol: &'static str, enabled: bool| {
            let style = if enabled {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(symbol, style)
        };

        let controls = Line::from(vec![
            Span::styled(format!("{PAGE_SIZE_LABEL} {} ", state.page_size), Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" Page {} of {} ", state.current_page, state.page_count.max(1)),
                Style::default().fg(Color::White),
            ),
            button("«", nav.first),
            Span::raw(" "),
            button("‹", nav.previous),
            Span::raw(" "),
            button("›", nav.next),
            Span::raw(" "),
            button("»", nav.last),
        ]);
        f.render_widget(Paragraph::new(controls).alignment(ratatui::layout::Alignment::Right), chunks[1]);
    }
}
