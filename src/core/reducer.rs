//! Pure transition function for the calculator.

use super::format::format_number;
use super::operator::Operator;
use super::state::CalculatorState;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A finished operation, produced when `=` resolves a pending operator.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Computation {
    /// Human-readable form, e.g. `"12 + 3"`.
    pub expression: String,
    /// Formatted result, identical to the display after `=`.
    pub result: String,
}

/// Outcome of reducing one symbol.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    /// The state after the symbol.
    pub state: CalculatorState,
    /// Set only when `=` completed an operation.
    pub completed: Option<Computation>,
}

impl Step {
    fn to(state: CalculatorState) -> Self {
        Self {
            state,
            completed: None,
        }
    }
}

/// Apply one symbol to a state, returning the next state.
///
/// This is a pure function: the input state is not modified, and nothing
/// is recorded anywhere. The caller decides what to do with
/// [`Step::completed`].
///
/// # Example
///
/// ```rust
/// use tally::core::{reduce, CalculatorState, Symbol};
///
/// let mut state = CalculatorState::default();
/// let mut completed = None;
/// for tap in ["1", "2", "+", "3", "="] {
///     let step = reduce(&state, tap.parse::<Symbol>().unwrap());
///     state = step.state;
///     completed = step.completed.or(completed);
/// }
///
/// assert_eq!(state.display, "15");
/// assert_eq!(completed.unwrap().expression, "12 + 3");
/// ```
pub fn reduce(state: &CalculatorState, symbol: Symbol) -> Step {
    match symbol {
        Symbol::Digit(d) if d <= 9 => Step::to(enter_digit(state, d)),
        Symbol::Digit(_) => Step::to(state.clone()),
        Symbol::Decimal => Step::to(enter_decimal(state)),
        Symbol::Clear => Step::to(CalculatorState::default()),
        Symbol::ToggleSign => Step::to(map_display(state, |v| -v)),
        Symbol::Percent => Step::to(map_display(state, |v| v / 100.0)),
        Symbol::Operator(op) => Step::to(set_operator(state, op)),
        Symbol::Equals => equals(state),
    }
}

fn enter_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    let digit = char::from(b'0' + digit);
    let display = if !state.typing {
        digit.to_string()
    } else {
        match state.display.as_str() {
            "0" => digit.to_string(),
            "-0" => format!("-{digit}"),
            current => format!("{current}{digit}"),
        }
    };

    CalculatorState {
        display,
        typing: true,
        ..state.clone()
    }
}

fn enter_decimal(state: &CalculatorState) -> CalculatorState {
    if !state.typing {
        return CalculatorState {
            display: "0.".to_string(),
            typing: true,
            ..state.clone()
        };
    }
    if state.display.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display: format!("{}.", state.display),
        ..state.clone()
    }
}

fn map_display(state: &CalculatorState, f: impl Fn(f64) -> f64) -> CalculatorState {
    match state.value() {
        Some(value) => CalculatorState {
            display: format_number(f(value)),
            ..state.clone()
        },
        None => state.clone(),
    }
}

fn set_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    let Some(current) = state.value() else {
        return state.clone();
    };

    let (stored, display) = match (state.pending_op, state.stored_value) {
        (Some(pending), Some(stored)) if state.typing => {
            let result = pending.apply(stored, current);
            (result, format_number(result))
        }
        _ => (current, state.display.clone()),
    };

    CalculatorState {
        display,
        stored_value: Some(stored),
        pending_op: Some(op),
        typing: false,
    }
}

fn equals(state: &CalculatorState) -> Step {
    let (Some(op), Some(a), Some(b)) = (state.pending_op, state.stored_value, state.value()) else {
        return Step::to(state.clone());
    };

    let result = format_number(op.apply(a, b));
    let expression = format!("{} {} {}", format_number(a), op, format_number(b));

    Step {
        state: CalculatorState {
            display: result.clone(),
            stored_value: None,
            pending_op: None,
            typing: false,
        },
        completed: Some(Computation { expression, result }),
    }
}
