use ratatui::style::Color;

/// Palette used for avatar chips, picked per name so a person keeps a colour
const AVATAR_PALETTE: [Color; 8] = [
    Color::Rgb(184, 37, 95),
    Color::Rgb(199, 113, 0),
    Color::Rgb(101, 163, 58),
    Color::Rgb(20, 143, 173),
    Color::Rgb(65, 128, 255),
    Color::Rgb(105, 46, 194),
    Color::Rgb(224, 80, 149),
    Color::Rgb(143, 122, 105),
];

/// Stable avatar colour for a display name
#[must_use]
pub fn avatar_color(name: &str) -> Color {
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    AVATAR_PALETTE[(hash as usize) % AVATAR_PALETTE.len()]
}
