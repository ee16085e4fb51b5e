//! Number formatting for numeric table columns.

/// How a numeric cell is displayed
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Digits after the decimal mark
    pub decimals: usize,
    /// Grouping character for thousands, `None` disables grouping
    pub thousands_separator: Option<char>,
    pub decimal_mark: char,
    pub prefix: String,
    pub suffix: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 0,
            thousands_separator: Some(','),
            decimal_mark: '.',
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl NumberFormat {
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_separators(mut self, thousands: Option<char>, decimal_mark: char) -> Self {
        self.thousands_separator = thousands;
        self.decimal_mark = decimal_mark;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Format a number according to `format`
///
/// Non-finite values are rendered with their default representation.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return format!("{}{}{}", format.prefix, value, format.suffix);
    }

    let rendered = format!("{:.*}", format.decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::with_capacity(rendered.len() + 8);
    out.push_str(&format.prefix);
    // -0.00 after rounding is shown as 0.00
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(integer, format.thousands_separator));
    if let Some(fraction) = fraction {
        out.push(format.decimal_mark);
        out.push_str(fraction);
    }
    out.push_str(&format.suffix);
    out
}

fn group_thousands(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
