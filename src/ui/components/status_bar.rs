//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::AppState;
use crate::constants::STATUS_HINTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text and colour for the current page state
    pub fn status(state: &AppState, running_tasks: usize) -> (String, Color) {
        if let Some(error) = &state.error_message {
            (error.clone(), Color::Red)
        } else if state.bulk_pending {
            ("🔄 Applying bulk action...".to_string(), Color::Yellow)
        } else if state.is_loading {
            ("Loading prizes...".to_string(), Color::Yellow)
        } else if state.is_fetching {
            (format!("🔄 Loading page {}...", state.current_page), Color::Yellow)
        } else if let Some(info) = &state.info_message {
            (info.clone(), Color::Green)
        } else if running_tasks > 0 {
            (format!("{} background tasks • {}", running_tasks, STATUS_HINTS), Color::Gray)
        } else {
            (STATUS_HINTS.to_string(), Color::Gray)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, running_tasks: usize) {
        let (status_text, status_color) = Self::status(state, running_tasks);

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
