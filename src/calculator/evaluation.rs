//! Evaluating a history into a displayable result.

use serde::Serialize;
use tracing::{debug, warn};

use super::{CalcError, History, HistoryItem};
use crate::format::NumberFormat;

/// How failures are shown on the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorStyle {
    /// Fixed text shown for any failure.
    pub text: String,
    /// Show the error kind instead of the fixed text.
    pub distinguish: bool,
}

impl Default for ErrorStyle {
    fn default() -> Self {
        Self {
            text: "Error".to_string(),
            distinguish: false,
        }
    }
}

impl ErrorStyle {
    pub fn message(&self, error: CalcError) -> String {
        if self.distinguish {
            error.to_string()
        } else {
            self.text.clone()
        }
    }
}

/// Result of evaluating a history.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// The fold completed with a finite value.
    Success {
        /// The evaluated entries, as typed.
        expression: String,
        value: f64,
        /// Formatted for the display.
        display_result: String,
    },
    /// An arithmetic step failed.
    Error {
        /// The evaluated entries, as typed.
        expression: String,
        error: CalcError,
        /// Text to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// Get the failure kind (only for errors).
    pub fn error(&self) -> Option<CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(*error),
        }
    }
}

/// Evaluate `history` and format the outcome.
pub fn evaluate_history(
    history: &History,
    format: &NumberFormat,
    style: &ErrorStyle,
) -> CalcResult {
    let expression = describe(history, format);

    match history.evaluate() {
        Ok(value) => {
            debug!(%expression, value, "evaluated");
            CalcResult::Success {
                display_result: format.render(value),
                expression,
                value,
            }
        }
        Err(error) => {
            warn!(%expression, %error, "evaluation failed");
            CalcResult::Error {
                message: style.message(error),
                expression,
                error,
            }
        }
    }
}

/// Render the history entries separated by spaces, e.g. `10 / 2 X 4`.
pub fn describe(history: &History, format: &NumberFormat) -> String {
    history
        .items()
        .iter()
        .map(|item| match item {
            HistoryItem::Number(value) => format.render(*value),
            HistoryItem::Operator(op) => op.symbol().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
