//! Keypad symbols accepted by the reducer.

use super::operator::Operator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a tap string does not name a keypad symbol.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown symbol: {0:?}")]
pub struct SymbolError(pub String);

/// A single keypad input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    Decimal,
    Clear,
    ToggleSign,
    Percent,
    Operator(Operator),
    Equals,
}

impl Symbol {
    /// Build a digit symbol, rejecting anything above nine.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Ok(Self::Digit(d as u8));
            }
        }

        match s {
            "." | "," => Ok(Self::Decimal),
            "C" | "c" | "AC" => Ok(Self::Clear),
            "±" | "+/-" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            "=" => Ok(Self::Equals),
            other => Operator::from_symbol(other)
                .map(Self::Operator)
                .ok_or_else(|| SymbolError(other.to_string())),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Clear => f.write_str("C"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percent => f.write_str("%"),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keypad_label() {
        let labels = [
            "C", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "−", "1", "2", "3", "+", "0",
            ".", "=",
        ];
        for label in labels {
            let symbol: Symbol = label.parse().unwrap();
            assert_eq!(symbol.to_string(), label);
        }
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        assert_eq!(
            "sin".parse::<Symbol>(),
            Err(SymbolError("sin".to_string()))
        );
        assert!("".parse::<Symbol>().is_err());
        assert!("12".parse::<Symbol>().is_err());
    }

    #[test]
    fn digit_constructor_rejects_out_of_range() {
        assert_eq!(Symbol::digit(9), Some(Symbol::Digit(9)));
        assert_eq!(Symbol::digit(10), None);
    }
}
