//! Domain types for pocket-calc.
//!
//! Operations, operands and keypad buttons. Pure data, no I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalcError;

// ============================================================================
// OPERATIONS
// ============================================================================

/// A binary arithmetic operation selected on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in keypad column order (top to bottom).
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// The symbol shown on the keypad and after the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    /// Apply the operation with `lhs` as the left operand.
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero yields ±∞ or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts the canonical symbols plus the common typographic aliases
    /// (`−`, `×`, `x`, `/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "-" | "−" => Ok(Operation::Subtract),
            "*" | "×" | "x" | "X" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

// ============================================================================
// OPERANDS
// ============================================================================

/// An operand slot's content.
///
/// Keystrokes accumulate as raw text because partial input (`"12."`,
/// `"007"`) is not a number yet. Only evaluation produces a `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Raw keystroke text: digits and at most one decimal point.
    Input(String),
    /// Result of the last evaluation.
    Value(f64),
}

impl Default for Operand {
    fn default() -> Self {
        Operand::Input(String::new())
    }
}

impl Operand {
    /// True for empty input text. A `Value` is never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Operand::Input(text) if text.is_empty())
    }

    /// Numeric reading of the operand, or `None` if it is not a number yet.
    ///
    /// `"1."` reads as 1 and `".5"` as 0.5; `""` and `"."` do not parse.
    /// A NaN result is not a number either, while ±∞ still reads.
    pub fn parse(&self) -> Option<f64> {
        match self {
            Operand::Input(text) if text.is_empty() => None,
            Operand::Input(text) => text.parse::<f64>().ok(),
            Operand::Value(value) if value.is_nan() => None,
            Operand::Value(value) => Some(*value),
        }
    }

    /// Textual form: input verbatim, finite values in shortest round-trip
    /// notation. A `-0` result reads as `0`. Non-finite values have no
    /// editable text and yield `None`.
    pub fn text(&self) -> Option<String> {
        match self {
            Operand::Input(text) => Some(text.clone()),
            Operand::Value(value) if *value == 0.0 => Some("0".to_string()),
            Operand::Value(value) if value.is_finite() => Some(value.to_string()),
            Operand::Value(_) => None,
        }
    }

    /// Turn the operand into editable input text.
    ///
    /// Finite results keep their digits; a non-finite result is discarded.
    pub fn into_input(self) -> String {
        self.text().unwrap_or_default()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Input(text) => f.write_str(text),
            Operand::Value(value) => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A keypad button. Each press maps to exactly one calculator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Digit 0-9.
    Digit(u8),
    /// Decimal point.
    Decimal,
    /// Operation select.
    Operation(Operation),
    /// Remove the last typed character.
    Delete,
    /// Evaluate the pending operation.
    Equals,
    /// Reset everything.
    AllClear,
}

impl Button {
    /// Label printed on the keypad.
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Button::Decimal => ".",
            Button::Operation(op) => op.symbol(),
            Button::Delete => "DEL",
            Button::Equals => "=",
            Button::AllClear => "AC",
        }
    }

    /// The character this button appends to the current operand, if any.
    pub fn token(self) -> Option<char> {
        match self {
            Button::Digit(d) => char::from_digit(u32::from(d), 10),
            Button::Decimal => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(d) = DIGIT_LABELS.iter().position(|&label| label == trimmed) {
            return Ok(Button::Digit(d as u8));
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "." => return Ok(Button::Decimal),
            "=" => return Ok(Button::Equals),
            "DEL" | "DELETE" => return Ok(Button::Delete),
            "AC" | "CLEAR" => return Ok(Button::AllClear),
            _ => {}
        }

        trimmed
            .parse::<Operation>()
            .map(Button::Operation)
            .map_err(|_| CalcError::UnknownButton(s.to_string()))
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for headless display rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two plain text lines, previous line first.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn operation_parses_aliases() {
        assert_eq!("×".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("x".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("−".parse::<Operation>().unwrap(), Operation::Subtract);
    }

    #[test]
    fn operation_rejects_unknown_symbol() {
        let err = "%".parse::<Operation>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownOperation(s) if s == "%"));
    }

    #[test]
    fn subtraction_and_division_keep_operand_order() {
        assert_eq!(Operation::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(Operation::Divide.apply(10.0, 4.0), 2.5);
    }

    #[test]
    fn division_by_zero_is_non_finite() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn operand_parse_partial_input() {
        assert_eq!(Operand::Input("1.".into()).parse(), Some(1.0));
        assert_eq!(Operand::Input(".5".into()).parse(), Some(0.5));
        assert_eq!(Operand::Input("007".into()).parse(), Some(7.0));
        assert_eq!(Operand::Input(".".into()).parse(), None);
        assert_eq!(Operand::Input(String::new()).parse(), None);
    }

    #[test]
    fn operand_parse_non_finite_values() {
        assert_eq!(Operand::Value(f64::NAN).parse(), None);
        assert_eq!(Operand::Value(f64::INFINITY).parse(), Some(f64::INFINITY));
        assert_eq!(Operand::Value(f64::NEG_INFINITY).parse(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn operand_text_of_values() {
        assert_eq!(Operand::Value(9.0).text().as_deref(), Some("9"));
        assert_eq!(Operand::Value(2.5).text().as_deref(), Some("2.5"));
        assert_eq!(Operand::Value(-3.0).text().as_deref(), Some("-3"));
        assert_eq!(Operand::Value(-0.0).text().as_deref(), Some("0"));
        assert_eq!(Operand::Input("-0".into()).text().as_deref(), Some("-0"));
        assert_eq!(Operand::Value(f64::INFINITY).text(), None);
        assert_eq!(Operand::Value(f64::NAN).into_input(), "");
    }

    #[test]
    fn empty_operand() {
        assert!(Operand::default().is_empty());
        assert!(!Operand::Input("0".into()).is_empty());
        assert!(!Operand::Value(0.0).is_empty());
    }

    #[test]
    fn button_labels_round_trip() {
        let buttons = [
            Button::Digit(0),
            Button::Digit(7),
            Button::Decimal,
            Button::Operation(Operation::Divide),
            Button::Delete,
            Button::Equals,
            Button::AllClear,
        ];
        for button in buttons {
            assert_eq!(button.label().parse::<Button>().unwrap(), button);
        }
    }

    #[test]
    fn button_word_labels_are_case_insensitive() {
        assert_eq!("del".parse::<Button>().unwrap(), Button::Delete);
        assert_eq!("ac".parse::<Button>().unwrap(), Button::AllClear);
        assert_eq!("clear".parse::<Button>().unwrap(), Button::AllClear);
    }

    #[test]
    fn button_rejects_unknown_label() {
        let err = "12".parse::<Button>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownButton(s) if s == "12"));
    }

    #[test]
    fn only_digits_and_decimal_have_tokens() {
        assert_eq!(Button::Digit(4).token(), Some('4'));
        assert_eq!(Button::Decimal.token(), Some('.'));
        assert_eq!(Button::Equals.token(), None);
        assert_eq!(Button::Operation(Operation::Add).token(), None);
    }
}
