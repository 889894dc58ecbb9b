//! Turning a typed line into key presses.
//!
//! A line is a flat run of keypad labels such as `12,5 + 3 X 2 =`.
//! Whitespace is ignored.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::Key;

lazy_static! {
    /// Matches strings made only of keypad labels and whitespace.
    static ref KEYPAD_CHARS: Regex = Regex::new(
        r"^[\d\s\.,\+\-−\*/xX×÷=cC]+$"
    ).unwrap();

    static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no key for {key:?} at column {column}")]
    UnknownKey { key: char, column: usize },
}

/// Check if a line is made only of keypad labels and has at least one digit.
///
/// A fast pre-check before tokenizing.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();
    KEYPAD_CHARS.is_match(trimmed) && HAS_DIGIT.is_match(trimmed)
}

/// Split a line into key presses, in order.
///
/// Columns in errors are 1-based and count characters, not bytes.
pub fn tokenize(input: &str) -> Result<Vec<Key>, InputError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| {
            Key::from_label(c).ok_or(InputError::UnknownKey {
                key: c,
                column: i + 1,
            })
        })
        .collect()
}
