//! The keypad session: turns key presses into history entries and keeps
//! the display text.

use tracing::{debug, trace};

use crate::calculator::{CalcResult, ErrorStyle, History, Operation, evaluate_history};
use crate::format::NumberFormat;
use crate::keys::Key;

const ZERO: &str = "0";

/// One calculator session with its display and history.
///
/// The history is cleared after every `=` and on `C`, so each evaluation
/// starts from an empty history.
#[derive(Clone, Debug)]
pub struct Session {
    history: History,
    display: String,
    /// The display holds a result or error rather than a typed entry.
    finished: bool,
    format: NumberFormat,
    errors: ErrorStyle,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(NumberFormat::default(), ErrorStyle::default())
    }
}

impl Session {
    pub fn new(format: NumberFormat, errors: ErrorStyle) -> Self {
        Self {
            history: History::new(),
            display: ZERO.to_string(),
            finished: false,
            format,
            errors,
        }
    }

    /// Get the current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Dispatch a key press.
    ///
    /// Returns the evaluation result when the key was `=` and the display
    /// held a number.
    pub fn press(&mut self, key: Key) -> Option<CalcResult> {
        trace!(key = %key.label(self.format.decimal_separator), "key pressed");
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Separator => self.press_separator(),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => return self.press_equals(),
            Key::Clear => self.press_clear(),
        }
        None
    }

    /// Press every key in order, returning the last evaluation result.
    pub fn feed(&mut self, keys: impl IntoIterator<Item = Key>) -> Option<CalcResult> {
        keys.into_iter().fold(None, |last, key| self.press(key).or(last))
    }

    pub fn press_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.finished || self.display == ZERO {
            self.display = c.to_string();
            self.finished = false;
        } else {
            self.display.push(c);
        }
    }

    pub fn press_separator(&mut self) {
        if self.finished {
            self.display = ZERO.to_string();
            self.finished = false;
        }
        if self.display.contains(self.format.decimal_separator) {
            return;
        }
        self.display.push(self.format.decimal_separator);
    }

    /// Move the displayed number and `op` into the history.
    ///
    /// Ignored when the display does not hold a number, e.g. after an error.
    pub fn press_operator(&mut self, op: Operation) {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, %op, "operator ignored, display is not a number");
            return;
        };

        debug!(value, %op, "operator pressed");
        self.history.push_number(value);
        self.history.push_operator(op);
        self.reset_display();
    }

    /// Evaluate the history with the displayed number as the last operand.
    ///
    /// The history is cleared whether or not the evaluation succeeds. When the
    /// display does not hold a number the press is ignored and the history
    /// is kept.
    pub fn press_equals(&mut self) -> Option<CalcResult> {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "equals ignored, display is not a number");
            return None;
        };

        self.history.push_number(value);
        let result = evaluate_history(&self.history, &self.format, &self.errors);
        self.history.clear();

        self.display = result.display().to_string();
        self.finished = true;
        Some(result)
    }

    pub fn press_clear(&mut self) {
        debug!("clear pressed");
        self.history.clear();
        self.reset_display();
    }

    fn reset_display(&mut self) {
        self.display = ZERO.to_string();
        self.finished = false;
    }
}
