//! The calculator state machine.
//!
//! Holds a current operand, and optionally a pending (previous operand,
//! operation) pair. Every method mutates state in place and never fails:
//! input that makes no sense in the current state is ignored. Rendering is
//! a separate step, see [`crate::display::refresh`].

use tracing::{debug, trace};

use crate::types::{Button, Operand, Operation};

/// The left-hand side of an operation waiting for its right operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub operand: Operand,
    pub operation: Operation,
}

/// Four-function calculator with eager, left-to-right evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    current: Operand,
    pending: Option<Pending>,
}

impl Calculator {
    /// A calculator with all fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The operand being typed, or the last result.
    pub fn current_operand(&self) -> &Operand {
        &self.current
    }

    /// The committed left operand, if an operation is pending.
    pub fn previous_operand(&self) -> Option<&Operand> {
        self.pending.as_ref().map(|p| &p.operand)
    }

    /// The pending operation, if any.
    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Append a digit or decimal point to the current operand.
    ///
    /// A second decimal point is dropped. Editing a result continues from
    /// its digits; a non-finite result is replaced.
    pub fn append_number(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            debug!(%token, "ignoring non-numeric token");
            return;
        }

        let mut text = std::mem::take(&mut self.current).into_input();

        if token == '.' && text.contains('.') {
            debug!("ignoring second decimal point");
            self.current = Operand::Input(text);
            return;
        }

        text.push(token);
        trace!(current = %text, "appended");
        self.current = Operand::Input(text);
    }

    /// Select an operation, committing the current operand as its left side.
    ///
    /// A pending operation is evaluated first, so `2 + 3 +` shows `5 +`.
    pub fn set_operation(&mut self, operation: Operation) {
        if self.current.is_empty() {
            debug!(%operation, "ignoring operation without an operand");
            return;
        }

        if self.pending.is_some() {
            self.calculate();
        }

        let operand = std::mem::take(&mut self.current);
        trace!(previous = %operand, %operation, "operation set");
        self.pending = Some(Pending { operand, operation });
    }

    /// Remove the last character of the current operand.
    pub fn delete(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let mut text = std::mem::take(&mut self.current).into_input();
        text.pop();
        trace!(current = %text, "deleted");
        self.current = Operand::Input(text);
    }

    /// Evaluate the pending operation into the current operand.
    ///
    /// Does nothing unless both operands read as numbers and an operation
    /// is pending. Division by zero yields ±∞ or NaN.
    pub fn calculate(&mut self) {
        let Some(pending) = &self.pending else {
            debug!("nothing to calculate");
            return;
        };

        let (Some(lhs), Some(rhs)) = (pending.operand.parse(), self.current.parse()) else {
            debug!(
                previous = %pending.operand,
                current = %self.current,
                "ignoring calculate with incomplete operands"
            );
            return;
        };

        let result = pending.operation.apply(lhs, rhs);
        trace!(lhs, operation = %pending.operation, rhs, result, "calculated");

        self.pending = None;
        self.current = Operand::Value(result);
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        trace!("cleared");
        self.current = Operand::default();
        self.pending = None;
    }

    /// Dispatch one keypad button to its transition.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Digit(_) | Button::Decimal => {
                if let Some(token) = button.token() {
                    self.append_number(token);
                }
            }
            Button::Operation(operation) => self.set_operation(operation),
            Button::Delete => self.delete(),
            Button::Equals => self.calculate(),
            Button::AllClear => self.clear(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typed(text: &str) -> Calculator {
        let mut calc = Calculator::new();
        for token in text.chars() {
            calc.append_number(token);
        }
        calc
    }

    fn pressed(labels: &[&str]) -> Calculator {
        let mut calc = Calculator::new();
        for label in labels {
            calc.press(label.parse().unwrap());
        }
        calc
    }

    fn input(text: &str) -> Operand {
        Operand::Input(text.to_string())
    }

    // -- append_number --

    #[test]
    fn append_concatenates_text() {
        let calc = typed("1203.5");
        assert_eq!(calc.current_operand(), &input("1203.5"));
    }

    #[test]
    fn append_keeps_leading_zeros_and_trailing_point() {
        assert_eq!(typed("007").current_operand(), &input("007"));
        assert_eq!(typed("12.").current_operand(), &input("12."));
    }

    #[test]
    fn second_decimal_point_is_dropped() {
        let calc = typed("1.2.3.");
        assert_eq!(calc.current_operand(), &input("1.23"));
    }

    #[test]
    fn non_numeric_token_is_ignored() {
        let calc = typed("1a2");
        assert_eq!(calc.current_operand(), &input("12"));
    }

    #[test]
    fn append_after_result_extends_its_digits() {
        let mut calc = pressed(&["2", "+", "3", "="]);
        calc.append_number('1');
        assert_eq!(calc.current_operand(), &input("51"));
    }

    #[test]
    fn decimal_after_fractional_result_is_dropped() {
        let mut calc = pressed(&["5", "÷", "2", "="]);
        calc.append_number('.');
        assert_eq!(calc.current_operand(), &input("2.5"));
    }

    #[test]
    fn append_after_infinite_result_starts_fresh() {
        let mut calc = pressed(&["1", "÷", "0", "="]);
        calc.append_number('7');
        assert_eq!(calc.current_operand(), &input("7"));
    }

    // -- set_operation --

    #[test]
    fn set_operation_on_empty_operand_is_noop() {
        let mut calc = Calculator::new();
        calc.set_operation(Operation::Add);
        assert_eq!(calc, Calculator::new());

        let mut calc = pressed(&["4", "*"]);
        let before = calc.clone();
        calc.set_operation(Operation::Subtract);
        assert_eq!(calc, before);
    }

    #[test]
    fn set_operation_commits_current_operand() {
        let calc = pressed(&["1", "2", "-"]);
        assert_eq!(calc.previous_operand(), Some(&input("12")));
        assert_eq!(calc.operation(), Some(Operation::Subtract));
        assert!(calc.current_operand().is_empty());
    }

    #[test]
    fn chained_operations_evaluate_left_to_right() {
        let mut calc = Calculator::new();
        calc.append_number('2');
        calc.set_operation(Operation::Add);
        calc.append_number('3');
        calc.set_operation(Operation::Add);

        assert_eq!(calc.previous_operand(), Some(&Operand::Value(5.0)));
        assert_eq!(calc.operation(), Some(Operation::Add));

        calc.append_number('4');
        calc.calculate();
        assert_eq!(calc.current_operand().parse(), Some(9.0));
    }

    #[test]
    fn chaining_ignores_precedence() {
        let calc = pressed(&["2", "+", "3", "*", "4", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(20.0));
    }

    #[test]
    fn operation_on_result_continues_from_it() {
        let calc = pressed(&["2", "+", "3", "=", "*", "2", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(10.0));
    }

    #[test]
    fn chaining_with_unparseable_operand_replaces_pending() {
        let calc = pressed(&["8", "+", ".", "-"]);
        assert_eq!(calc.previous_operand(), Some(&input(".")));
        assert_eq!(calc.operation(), Some(Operation::Subtract));
    }

    // -- delete --

    #[test]
    fn delete_removes_last_character() {
        let mut calc = typed("12");
        calc.delete();
        assert_eq!(calc.current_operand(), &input("1"));
        calc.delete();
        assert_eq!(calc.current_operand(), &input(""));
        calc.delete();
        assert_eq!(calc.current_operand(), &input(""));
    }

    #[test]
    fn delete_does_not_touch_pending() {
        let mut calc = pressed(&["9", "÷"]);
        calc.delete();
        assert_eq!(calc.previous_operand(), Some(&input("9")));
        assert_eq!(calc.operation(), Some(Operation::Divide));
    }

    #[test]
    fn delete_on_result_edits_its_digits() {
        let mut calc = pressed(&["1", "0", "÷", "4", "="]);
        calc.delete();
        assert_eq!(calc.current_operand(), &input("2."));
    }

    #[test]
    fn delete_on_nan_result_empties_operand() {
        let mut calc = pressed(&["0", "÷", "0", "="]);
        calc.delete();
        assert!(calc.current_operand().is_empty());
    }

    // -- calculate --

    #[test]
    fn divide_ten_by_four() {
        let mut calc = pressed(&["1", "0", "÷", "4"]);
        calc.calculate();
        assert_eq!(calc.current_operand(), &Operand::Value(2.5));
        assert_eq!(calc.previous_operand(), None);
        assert_eq!(calc.operation(), None);
    }

    #[test]
    fn subtraction_uses_previous_as_minuend() {
        let calc = pressed(&["3", "-", "1", "0", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(-7.0));
    }

    #[test]
    fn multiplication() {
        let calc = pressed(&["1", ".", "5", "*", "4", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(6.0));
    }

    #[test]
    fn calculate_on_fresh_state_is_noop() {
        let mut calc = Calculator::new();
        calc.clear();
        calc.calculate();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn calculate_without_right_operand_is_noop() {
        let mut calc = pressed(&["7", "+"]);
        let before = calc.clone();
        calc.calculate();
        assert_eq!(calc, before);
    }

    #[test]
    fn calculate_without_operation_is_noop() {
        let mut calc = typed("42");
        calc.calculate();
        assert_eq!(calc.current_operand(), &input("42"));
    }

    #[test]
    fn calculate_with_bare_decimal_point_is_noop() {
        let mut calc = pressed(&["7", "+", "."]);
        let before = calc.clone();
        calc.calculate();
        assert_eq!(calc, before);
    }

    #[test]
    fn calculate_with_nan_operand_is_noop() {
        let mut calc = pressed(&["0", "÷", "0", "=", "+", "5"]);
        let before = calc.clone();
        assert_eq!(before.operation(), Some(Operation::Add));

        calc.calculate();
        assert_eq!(calc, before);
        assert_eq!(calc.current_operand(), &Operand::Input("5".into()));
    }

    #[test]
    fn infinity_operand_still_calculates() {
        let calc = pressed(&["5", "÷", "0", "=", "+", "1", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(f64::INFINITY));
        assert_eq!(calc.operation(), None);
    }

    #[test]
    fn division_by_zero_propagates_infinity() {
        let calc = pressed(&["5", "÷", "0", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(f64::INFINITY));

        let calc = pressed(&["0", "÷", "0", "="]);
        assert!(matches!(calc.current_operand(), Operand::Value(v) if v.is_nan()));
    }

    #[test]
    fn partial_inputs_parse_for_evaluation() {
        let calc = pressed(&["1", ".", "+", ".", "5", "="]);
        assert_eq!(calc.current_operand(), &Operand::Value(1.5));
    }

    // -- clear --

    #[test]
    fn clear_resets_everything() {
        let mut calc = pressed(&["1", "2", "*", "3"]);
        calc.clear();
        assert_eq!(calc, Calculator::new());

        let mut calc = pressed(&["1", "÷", "0", "="]);
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }

    // -- properties --

    fn button_strategy() -> impl Strategy<Value = Button> {
        prop_oneof![
            (0u8..=9).prop_map(Button::Digit),
            Just(Button::Decimal),
            prop::sample::select(Operation::ALL.to_vec()).prop_map(Button::Operation),
            Just(Button::Delete),
            Just(Button::Equals),
            Just(Button::AllClear),
        ]
    }

    proptest! {
        #[test]
        fn prop_append_is_concatenation(text in "[0-9]{0,12}(\\.[0-9]{0,6})?") {
            let calc = typed(&text);
            prop_assert_eq!(calc.current_operand(), &input(&text));
        }

        #[test]
        fn prop_second_decimal_point_dropped(
            head in "[0-9]{0,6}\\.[0-9]{0,6}",
            tail in "[0-9]{0,6}",
        ) {
            let mut calc = typed(&head);
            calc.append_number('.');
            for token in tail.chars() {
                calc.append_number(token);
            }
            prop_assert_eq!(calc.current_operand(), &input(&format!("{}{}", head, tail)));
        }

        #[test]
        fn prop_input_never_has_two_decimal_points(
            buttons in prop::collection::vec(button_strategy(), 0..40),
        ) {
            let mut calc = Calculator::new();
            for button in buttons {
                calc.press(button);
                if let Operand::Input(text) = calc.current_operand() {
                    prop_assert!(text.matches('.').count() <= 1);
                }
            }
        }

        #[test]
        fn prop_clear_restores_fresh_state(
            buttons in prop::collection::vec(button_strategy(), 0..40),
        ) {
            let mut calc = Calculator::new();
            for button in buttons {
                calc.press(button);
            }
            calc.clear();
            prop_assert_eq!(calc, Calculator::new());
        }

        #[test]
        fn prop_repeated_delete_converges_to_empty(text in "[0-9]{0,10}(\\.[0-9]{0,4})?") {
            let mut calc = typed(&text);
            for _ in 0..=text.len() {
                calc.delete();
            }
            prop_assert!(calc.current_operand().is_empty());
        }
    }
}
