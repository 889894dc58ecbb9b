//! Conversion between display text and numbers.
//!
//! The display uses a single configurable decimal separator and never
//! groups digits.

/// Most fraction digits the display will show.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Decimal formatting rules for the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    pub fn new(decimal_separator: char, max_fraction_digits: usize) -> Self {
        Self {
            decimal_separator,
            max_fraction_digits,
        }
    }

    /// Parse display text into a finite number.
    ///
    /// Accepts an optional leading `-`, digits and at most one decimal
    /// separator. A trailing separator is allowed so that a half-typed entry
    /// like `12,` still reads as `12`.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);

        let mut seen_separator = false;
        let mut seen_digit = false;
        for c in digits.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
            } else if c == self.decimal_separator && !seen_separator {
                seen_separator = true;
            } else {
                return None;
            }
        }
        if !seen_digit {
            return None;
        }

        let normalized: String = text
            .chars()
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        normalized.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    /// Render a number for the display.
    ///
    /// Rounds to `max_fraction_digits` (capped at [`MAX_FRACTION_DIGITS`]),
    /// drops trailing zeros and never prints a negative zero or exponent
    /// notation.
    pub fn render(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let digits = self.max_fraction_digits.min(MAX_FRACTION_DIGITS);
        let mut text = format!("{:.*}", digits, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }

        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}
