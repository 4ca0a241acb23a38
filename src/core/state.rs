//! Calculator state value.
//!
//! The state is a plain value: the reducer never mutates it in place but
//! produces the next one, which keeps every transition testable without a
//! session or storage around it.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator needs to interpret the next keypad symbol.
///
/// # Invariant
///
/// A pending operator always has a stored operand to apply to:
/// `pending_op.is_some()` implies `stored_value.is_some()`.
///
/// # Example
///
/// ```rust
/// use tally::core::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert_eq!(state.display, "0");
/// assert!(state.pending_op.is_none());
/// assert!(!state.typing);
/// assert!(state.is_consistent());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text shown on the display.
    pub display: String,
    /// Left operand of the pending operation.
    pub stored_value: Option<f64>,
    /// Operator waiting for its second operand.
    pub pending_op: Option<Operator>,
    /// `true` while the display holds digits the user is still entering,
    /// `false` when it shows a computed or stored value.
    pub typing: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            stored_value: None,
            pending_op: None,
            typing: false,
        }
    }
}

impl CalculatorState {
    /// Numeric value of the display, if it parses.
    pub fn value(&self) -> Option<f64> {
        self.display.parse().ok()
    }

    /// Check the pending-operator invariant.
    pub fn is_consistent(&self) -> bool {
        self.pending_op.is_none() || self.stored_value.is_some()
    }

    /// `true` when an operator is waiting for its second operand.
    pub fn has_pending(&self) -> bool {
        self.pending_op.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_zero() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.value(), Some(0.0));
        assert!(state.stored_value.is_none());
        assert!(!state.has_pending());
    }

    #[test]
    fn value_parses_display_forms() {
        let mut state = CalculatorState::default();
        for (display, expected) in [("12.5", 12.5), ("-0", -0.0), ("1e+06", 1e6), ("0.", 0.0)] {
            state.display = display.to_string();
            assert_eq!(state.value(), Some(expected));
        }

        state.display = "Error".to_string();
        assert_eq!(state.value(), None);
    }

    #[test]
    fn pending_without_operand_is_inconsistent() {
        let state = CalculatorState {
            pending_op: Some(Operator::Add),
            ..CalculatorState::default()
        };
        assert!(!state.is_consistent());

        let state = CalculatorState {
            stored_value: Some(1.0),
            ..state
        };
        assert!(state.is_consistent());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState {
            display: "3.5".to_string(),
            stored_value: Some(2.0),
            pending_op: Some(Operator::Multiply),
            typing: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
