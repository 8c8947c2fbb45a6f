//! TUI state algebra: pure types, zero effects.
//!
//! The calculator is the only shared data. Everything else here is
//! per-session UI state (focus, last pressed key) or the vocabulary the
//! effects layer and the transition function use to talk to each other.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::calculator::Calculator;
use crate::types::Button;

use super::keypad::{Direction, Focus};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single reader thread forwards terminal input. The event loop maps
/// each event to at most one [`Action`].
#[derive(Debug)]
pub enum AppEvent {
    /// A key event; only navigation and quit keys map to actions.
    Key(KeyEvent),
    /// A mouse event; left clicks on a key press it.
    Mouse(MouseEvent),
    /// The terminal was resized; triggers a redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    /// The calculator state machine.
    pub calculator: Calculator,

    /// Keyboard focus on the keypad.
    pub focus: Focus,

    /// Key pressed by the last action, highlighted until the next press.
    pub last_pressed: Option<Button>,
}

impl App {
    /// Fresh calculator, focus on the top-left key.
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Press the key at a position (mouse click). Focus follows.
    PressAt(Focus),
    /// Press the focused key.
    PressFocused,
    /// Move keyboard focus.
    MoveFocus(Direction),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep running with this state.
    Continue(App),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
