//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (page on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(Self::STATUS_HEIGHT)])
            .split(area)
            .to_vec()
    }

    pub const STATUS_HEIGHT: u16 = 1;

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// A `width` x `height` popup anchored below `anchor`, flipped above it
    /// when there is no room underneath and kept inside `bounds`
    #[must_use]
    pub fn dropdown_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);

        let right = anchor.x.saturating_add(anchor.width);
        let x = right.saturating_sub(width).max(bounds.x);

        let below = anchor.y.saturating_add(anchor.height);
        let bottom = bounds.y.saturating_add(bounds.height);
        let y = if below.saturating_add(height) <= bottom {
            below
        } else {
            anchor.y.saturating_sub(height).max(bounds.y)
        };

        Rect::new(x, y, width, height)
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 70 };
        (help_width, help_height)
    }
}
