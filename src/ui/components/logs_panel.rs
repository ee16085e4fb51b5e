//! Debug logs overlay

use ratatui::{
    layout::{Alignment, Margin},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::super::layout::LayoutManager;
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::LogBuffer;

pub struct LogsPanel;

impl LogsPanel {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, buffer: &LogBuffer, scroll_offset: &mut usize) {
        let logs_area = LayoutManager::centered_rect(90, 90, area);
        f.render_widget(Clear, logs_area);

        let logs = buffer.get_logs();
        let lines: Vec<String> = if logs.is_empty() {
            vec!["No debug logs available".to_string()]
        } else {
            logs
        };

        let total_lines = lines.len();
        let visible_height = logs_area.height.saturating_sub(2) as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        *scroll_offset = (*scroll_offset).min(max_scroll);

        let logs_text = lines
            .iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let logs_paragraph = Paragraph::new(logs_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_DEBUG_LOGS)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(logs_paragraph, logs_area);

        if total_lines > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(*scroll_offset);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray));
            f.render_stateful_widget(
                scrollbar,
                logs_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}
