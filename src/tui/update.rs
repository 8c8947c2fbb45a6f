//! Pure state transitions: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Each press reaches the calculator
//! through exactly one [`Calculator::press`](crate::calculator::Calculator::press)
//! call; the view re-renders afterwards.

use tracing::debug;

use crate::types::Button;

use super::keypad::{key_at, move_focus};
use super::state::{Action, App, Transition};

/// Pure state transition function.
pub fn update(app: App, action: &Action) -> Transition {
    match action {
        Action::PressAt(focus) => match key_at(*focus) {
            Some(key) => {
                let app = App { focus: *focus, ..app };
                Transition::Continue(press(app, key.button))
            }
            None => Transition::Continue(app),
        },
        Action::PressFocused => match key_at(app.focus) {
            Some(key) => Transition::Continue(press(app, key.button)),
            None => Transition::Continue(app),
        },
        Action::MoveFocus(direction) => {
            let focus = move_focus(app.focus, *direction);
            Transition::Continue(App { focus, ..app })
        }
        Action::Quit => Transition::Quit,
    }
}

fn press(mut app: App, button: Button) -> App {
    debug!(%button, "pressed");
    app.calculator.press(button);
    app.last_pressed = Some(button);
    app
}

// ============================================================================
// TESTS
// ============================================================================
