//! Bulk actions bar.
//!
//! Shown while rows are selected. Running an action never clears the
//! selection; the host decides that once the action has settled, so a failed
//! action can be retried on the same rows.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::config::{ActionVariant, BulkActionConfig};
use super::selection::RowSelection;
use crate::constants::SPINNER_FRAMES;
use crate::ui::components::badge::create_count_badge;

pub fn is_visible(selected_count: usize, actions: &[BulkActionConfig]) -> bool {
    selected_count > 0 && !actions.is_empty()
}

/// A bulk action ready to hand to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest {
    pub action_id: String,
    pub row_ids: Vec<String>,
}

/// Build the request for the action at `index`, or nothing when the bar is
/// hidden, the index is out of range or a previous action is still pending
pub fn request(
    actions: &[BulkActionConfig],
    index: usize,
    selection: &RowSelection,
    pending: bool,
) -> Option<BulkRequest> {
    if pending || !is_visible(selection.len(), actions) {
        return None;
    }
    actions.get(index).map(|action| BulkRequest {
        action_id: action.id.clone(),
        row_ids: selection.ids(),
    })
}

/// Bulk actions bar component
pub struct BulkActionsBar;

impl BulkActionsBar {
    pub fn render(
        f: &mut Frame,
        area: Rect,
        selected_count: usize,
        actions: &[BulkActionConfig],
        pending: bool,
        spinner_frame: usize,
    ) {
        if !is_visible(selected_count, actions) || area.height == 0 {
            return;
        }

        let mut spans = vec![
            create_count_badge(selected_count),
            Span::styled(" selected ", Style::default().fg(Color::Gray)),
        ];

        if pending {
            spans.push(Span::styled(
                format!("{} working… ", SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]),
                Style::default().fg(Color::Yellow),
            ));
        }

        for (index, action) in actions.iter().enumerate() {
            let color = match (pending, action.variant) {
                (true, _) => Color::DarkGray,
                (false, ActionVariant::Destructive) => Color::Red,
                (false, ActionVariant::Default) => Color::White,
            };
            spans.push(Span::styled(
                format!("{}", index + 1),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
            let label = match &action.icon {
                Some(icon) => format!(" {icon} {}  ", action.label),
                None => format!(" {}  ", action.label),
            };
            spans.push(Span::styled(label, Style::default().fg(color)));
        }

        spans.push(Span::styled("x", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" Clear selection", Style::default().fg(Color::Gray)));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
