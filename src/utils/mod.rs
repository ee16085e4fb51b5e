//! Utility modules shared by the table renderers and the host page.
//!
//! - [`datetime`] - Timestamp parsing and pattern formatting
//! - [`number`] - Locale-style number formatting
//! - [`color`] - Colour helpers for avatars

pub mod color;
pub mod datetime;
pub mod number;
