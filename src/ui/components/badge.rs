use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use serde::{Deserialize, Serialize};

use crate::constants::AVATAR_FALLBACK_INITIAL;
use crate::utils::color::avatar_color;

/// Visual variants for badge cells and action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Default => Style::default().fg(Color::Black).bg(Color::White),
            Self::Secondary => Style::default().fg(Color::White).bg(Color::DarkGray),
            Self::Success => Style::default().fg(Color::Black).bg(Color::Green),
            Self::Warning => Style::default().fg(Color::Black).bg(Color::LightYellow),
            Self::Destructive => Style::default().fg(Color::White).bg(Color::Red),
            Self::Outline => Style::default().fg(Color::Gray),
        }
        .add_modifier(Modifier::BOLD)
    }
}

/// Create a padded badge for a status-like value
#[must_use]
pub fn create_badge(label: &str, variant: BadgeVariant) -> Span<'static> {
    let text = match variant {
        BadgeVariant::Outline => format!("({label})"),
        _ => format!(" {label} "),
    };
    Span::styled(text, variant.style())
}

/// Up to two upper-case initials taken from the first words of a name
#[must_use]
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        AVATAR_FALLBACK_INITIAL.to_string()
    } else {
        initials
    }
}

/// Create the coloured initials chip shown in avatar cells
#[must_use]
pub fn create_avatar_chip(name: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", initials(name)),
        Style::default()
            .fg(Color::White)
            .bg(avatar_color(name))
            .add_modifier(Modifier::BOLD),
    )
}

/// Create the selected-count badge shown in the bulk actions bar
#[must_use]
pub fn create_count_badge(count: usize) -> Span<'static> {
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
