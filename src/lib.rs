//! Tally: a pure functional calculator core with persisted history
//!
//! Tally follows the "pure core, imperative shell" approach. The calculator
//! itself is a reducer over an explicit state value with no side effects,
//! while persistence is isolated behind a small key-value storage trait.
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`] holds the display, one stored operand,
//!   one pending operator and the typing flag
//! - **Reducer**: [`reduce`] maps a state and a keypad [`Symbol`] to the
//!   next state, reporting any finished [`Computation`]
//! - **History**: an immutable newest-first list, persisted by
//!   [`store::HistoryStore`] through a [`storage::KeyValueStore`]
//!
//! # Example
//!
//! ```rust
//! use tally::core::{reduce, CalculatorState, Symbol};
//!
//! let mut state = CalculatorState::default();
//! for tap in ["8", "÷", "0", "="] {
//!     state = reduce(&state, tap.parse::<Symbol>().unwrap()).state;
//! }
//!
//! // Division by zero leaves the dividend unchanged.
//! assert_eq!(state.display, "8");
//! ```

pub mod calculator;
pub mod config;
pub mod core;
pub mod logging;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use calculator::Calculator;
pub use self::core::{reduce, CalculatorState, Computation, History, HistoryItem, Operator, Symbol};
