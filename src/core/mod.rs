//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The calculator state value and its reducer
//! - Keypad symbols and operators
//! - `%g`-style number formatting
//! - Immutable calculation history
//!
//! All logic in this module is pure (no side effects, no I/O). Persistence
//! lives in [`crate::store`] and [`crate::storage`].

mod format;
mod history;
mod operator;
mod reducer;
mod state;
mod symbol;

pub use format::{format_number, SIGNIFICANT_DIGITS};
pub use history::{History, HistoryItem};
pub use operator::Operator;
pub use reducer::{reduce, Computation, Step};
pub use state::CalculatorState;
pub use symbol::{Symbol, SymbolError};
