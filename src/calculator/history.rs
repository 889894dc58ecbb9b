//! Running history of keypad entries and its left-to-right fold.

use tracing::debug;

use super::{CalcError, Operation};

/// One entry of the history: an operand or an operator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HistoryItem {
    Number(f64),
    Operator(Operation),
}

/// Numbers and operators in the order they were entered.
///
/// Entries are expected to alternate `Number`, `Operator`, `Number`, ...
/// but nothing checks this on append. [`History::evaluate`] stops at the
/// first entry that breaks the pattern and returns what it has so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: HistoryItem) {
        self.items.push(item);
    }

    pub fn push_number(&mut self, value: f64) {
        self.append(HistoryItem::Number(value));
    }

    pub fn push_operator(&mut self, op: Operation) {
        self.append(HistoryItem::Operator(op));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fold the history left to right, ignoring operator precedence.
    ///
    /// Returns `0` when the history is empty or does not start with a number.
    /// A dangling operator or any other break in the alternation ends the
    /// fold early with the partial result. The first failing step aborts
    /// the whole evaluation.
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        let Some(HistoryItem::Number(first)) = self.items.first() else {
            return Ok(0.0);
        };

        let mut current = *first;
        for index in (1..self.items.len().saturating_sub(1)).step_by(2) {
            let (HistoryItem::Operator(op), HistoryItem::Number(next)) =
                (self.items[index], self.items[index + 1])
            else {
                debug!(index, "history alternation broken, stopping early");
                break;
            };
            current = op.calculate(current, next)?;
        }

        Ok(current)
    }
}
