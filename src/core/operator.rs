//! Binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four operators the calculator can hold as pending.
///
/// The display glyphs are the typographic ones (`−`, `×`, `÷`); ASCII
/// spellings are accepted when parsing input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph used on the keypad and in history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad glyph or its ASCII alias.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "−" | "-" => Some(Self::Subtract),
            "×" | "*" | "x" | "X" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Dividing by zero yields the dividend unchanged rather than an
    /// infinity or an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(10.0, 4.0), 6.0);
    /// assert_eq!(Operator::Divide.apply(8.0, 0.0), 8.0);
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    a
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
