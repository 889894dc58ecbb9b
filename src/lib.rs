//! A keypad calculator that evaluates strictly left to right.
//!
//! Numbers and operators are entered on a [`Session`], which keeps a
//! [`History`](calculator::History) of entries and folds it on `=`.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod format;
pub mod keys;
pub mod session;

pub use calculator::{CalcError, CalcResult, History, HistoryItem, Operation};
pub use session::Session;
