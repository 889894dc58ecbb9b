//! Calculator core: guarded operators, the entry history and its evaluation.
//!
//! This module provides:
//! - The four operators and their overflow and division guards
//! - The history of entered numbers and operators
//! - Left-to-right evaluation of a history into a displayable result

mod error;
mod evaluation;
mod history;
mod operation;

pub use error::CalcError;
pub use evaluation::{CalcResult, ErrorStyle, describe, evaluate_history};
pub use history::{History, HistoryItem};
pub use operation::{Operation, UnknownOperator};
