//! Keypad keys and parsing of typed key sequences.

mod line;

pub use line::{InputError, looks_like_expression, tokenize};

use crate::calculator::Operation;

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit button, `0` to `9`.
    Digit(u8),
    /// The decimal separator button.
    Separator,
    /// One of the four operator buttons.
    Operator(Operation),
    /// The `=` button.
    Equals,
    /// The `C` button.
    Clear,
}

impl Key {
    /// Parse a single keypad label.
    ///
    /// Both `,` and `.` are read as the separator key, whichever separator
    /// the display uses.
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            '0'..='9' => label.to_digit(10).map(|d| Self::Digit(d as u8)),
            ',' | '.' => Some(Self::Separator),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Operation::from_symbol(label).map(Self::Operator),
        }
    }

    /// Get the label printed on the button.
    pub fn label(&self, separator: char) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Separator => separator.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

impl From<Operation> for Key {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Key::from_label('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_label(','), Some(Key::Separator));
        assert_eq!(Key::from_label('.'), Some(Key::Separator));
        assert_eq!(Key::from_label('X'), Some(Key::Operator(Operation::Multiply)));
        assert_eq!(Key::from_label('='), Some(Key::Equals));
        assert_eq!(Key::from_label('c'), Some(Key::Clear));
        assert_eq!(Key::from_label('%'), None);
        assert_eq!(Key::from(Operation::Add), Key::Operator(Operation::Add));
    }

    #[test]
    fn test_label_round_trip() {
        let keys = [
            Key::Digit(0),
            Key::Digit(9),
            Key::Separator,
            Key::Operator(Operation::Divide),
            Key::Equals,
            Key::Clear,
        ];
        for key in keys {
            let label = key.label(',');
            let c = label.chars().next().unwrap();
            assert_eq!(Key::from_label(c), Some(key));
        }
    }
}
