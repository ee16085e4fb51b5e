//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::LayoutManager;

const HELP_CONTENT: &str = r"
REWARDSDESK - Prizes Admin
==========================

ROWS
----
j/k ↑↓      Move the cursor
Space       Select the row under the cursor
a           Select or clear every row on this page
x           Clear the selection
Enter / .   Open the row actions menu
1-9         Run the matching bulk action on the selection

ACTIONS MENU
------------
j/k ↑↓      Highlight an action
Enter       Run the highlighted action
Esc         Close the menu

FILTERS
-------
/           Focus the search box
Tab         Move between filters
←→          Change the focused select
Enter       Apply the search
Ctrl+U      Clear the search
Esc         Leave the toolbar

PAGES
-----
n/p ←→      Next or previous page
g/G         First or last page
+/-         Larger or smaller page size

GENERAL
-------
r           Reload
L           Toggle debug logs
?           Toggle this help
q           Quit

Press 'Esc' or '?' to close this help panel
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel; `scroll_offset` is clamped to the content
    pub fn render(f: &mut Frame, scroll_offset: &mut usize) {
        // Adaptive help panel size based on terminal size
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        let lines: Vec<&str> = HELP_CONTENT.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize; // Account for borders

        let max_scroll = total_lines.saturating_sub(visible_height);
        *scroll_offset = (*scroll_offset).min(max_scroll);

        let help_text = lines
            .iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let help_paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("❓ Help - {}/{} lines", *scroll_offset + 1, total_lines))
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}
