use serde::Serialize;
use thiserror::Error;

/// Failure of a single arithmetic step.
///
/// Both kinds abort the evaluation they occur in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    /// An operand or the result is NaN, infinite, or outside the finite range of `f64`.
    #[error("Overflow")]
    Overflow,
    /// The right-hand operand of a division is zero.
    #[error("Division by zero")]
    DivisionByZero,
}
