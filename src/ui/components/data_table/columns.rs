//! Column renderer registry.
//!
//! Every renderer is a pure function of `(row, column kind)`. Dispatch goes
//! through [`renderer_for`], which maps a [`ColumnType`] tag to its render
//! function. Tags the table core draws itself (`Actions`, `Selection`) have no
//! renderer and produce nothing, as does any kind that reaches a renderer
//! for a different tag.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use serde::Serialize;
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::config::{ColumnConfig, ColumnKind, ColumnType};
use crate::constants::ELLIPSIS;
use crate::ui::components::badge::{create_avatar_chip, create_badge, BadgeVariant};
use crate::utils::datetime::{format_with_pattern, from_unix_seconds, parse_timestamp};
use crate::utils::number::format_number;

/// Signature shared by all cell renderers
pub type RenderFn<T> = fn(&T, &ColumnKind<T>) -> Option<Line<'static>>;

/// Look up the renderer registered for a column type
pub fn renderer_for<T: Serialize>(tag: ColumnType) -> Option<RenderFn<T>> {
    match tag {
        ColumnType::Avatar => Some(render_avatar::<T>),
        ColumnType::String => Some(render_string::<T>),
        ColumnType::Link => Some(render_link::<T>),
        ColumnType::Relation => Some(render_relation::<T>),
        ColumnType::Badge => Some(render_badge::<T>),
        ColumnType::Date => Some(render_date::<T>),
        ColumnType::Number => Some(render_number::<T>),
        ColumnType::Custom => Some(render_custom::<T>),
        ColumnType::Actions | ColumnType::Selection => None,
    }
}

/// Render one cell. `None` means the cell is left blank.
pub fn render_cell<T: Serialize>(row: &T, column: &ColumnConfig<T>) -> Option<Line<'static>> {
    let render = renderer_for::<T>(column.column_type())?;
    render(row, &column.kind)
}

fn render_avatar<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Avatar { name, subtitle } = kind else {
        return None;
    };

    let name = name.resolve_text(row).unwrap_or_default();
    let mut spans = vec![create_avatar_chip(&name), Span::raw(" ")];
    if !name.is_empty() {
        spans.push(Span::raw(name));
    }
    if let Some(subtitle) = subtitle.as_ref().and_then(|s| s.resolve_text(row)) {
        spans.push(Span::styled(format!(" {subtitle}"), Style::default().fg(Color::DarkGray)));
    }
    Some(Line::from(spans))
}

fn render_string<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::String {
        value,
        fallback,
        max_width,
    } = kind
    else {
        return None;
    };

    let text = value.resolve_text(row).or_else(|| fallback.clone())?;
    let text = match max_width {
        Some(width) => truncate(&text, *width),
        None => text,
    };
    Some(Line::from(text))
}

fn render_link<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Link { label, href } = kind else {
        return None;
    };

    let text = label
        .resolve_text(row)
        .or_else(|| href.as_ref().and_then(|h| h.resolve_text(row)))?;
    Some(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    )))
}

fn render_relation<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Relation { path, fallback } = kind else {
        return None;
    };

    match path.resolve_text(row) {
        Some(text) => Some(Line::from(text)),
        None => Some(Line::from(Span::styled(
            fallback.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
    }
}

fn render_badge<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Badge { value, variants } = kind else {
        return None;
    };

    let raw = value.resolve_text(row)?;
    let (label, variant) = variants
        .iter()
        .find(|mapping| mapping.value == raw)
        .map(|mapping| (mapping.label.clone(), mapping.variant))
        .unwrap_or((raw, BadgeVariant::Default));
    Some(Line::from(create_badge(&label, variant)))
}

fn render_date<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Date {
        value,
        format,
        fallback,
    } = kind
    else {
        return None;
    };

    let text = match value.resolve(row) {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(from_unix_seconds)
            .and_then(|dt| format_with_pattern(&dt, format)),
        Some(Value::String(s)) => Some(
            parse_timestamp(&s)
                .and_then(|dt| format_with_pattern(&dt, format))
                .unwrap_or(s),
        ),
        _ => None,
    };
    text.or_else(|| fallback.clone()).map(Line::from)
}

fn render_number<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Number {
        value,
        format,
        fallback,
    } = kind
    else {
        return None;
    };

    let number = match value.resolve(row) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .map(|n| format_number(n, format))
        .or_else(|| fallback.clone())
        .map(Line::from)
}

fn render_custom<T: Serialize>(row: &T, kind: &ColumnKind<T>) -> Option<Line<'static>> {
    let ColumnKind::Custom { cell } = kind else {
        return None;
    };
    Some(cell(row))
}

/// Cut `text` to `width` terminal cells, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > budget {
            break;
        }
        out.push(ch);
        used += cells;
    }
    out.push_str(ELLIPSIS);
    out
}
