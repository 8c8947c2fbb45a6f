//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - White: digits and the decimal point
//! - Yellow: operations
//! - Green: equals
//! - Red: clearing keys (AC, DEL)
//! - Cyan: focus and keybinding hints
//! - Dim: de-emphasized (previous operand line, help)

use ratatui::style::{Color, Modifier, Style};

use crate::types::Button;

// ============================================================================
// DISPLAY STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Previous operand and pending operation.
pub const STYLE_PREVIOUS: Style = Style::new().fg(Color::DarkGray);

/// Current operand: the number the user is looking at.
pub const STYLE_CURRENT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Display frame.
pub const STYLE_DISPLAY_BORDER: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// KEY STYLES
// ============================================================================

pub const STYLE_DIGIT: Style = Style::new().fg(Color::White);

pub const STYLE_OPERATION: Style = Style::new().fg(Color::Yellow);

pub const STYLE_EQUALS: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub const STYLE_CLEAR: Style = Style::new().fg(Color::Red);

/// Focused key (keyboard navigation).
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Most recently pressed key.
pub const STYLE_PRESSED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Base style for a key by what it does.
pub fn key_style(button: Button) -> Style {
    match button {
        Button::Digit(_) | Button::Decimal => STYLE_DIGIT,
        Button::Operation(_) => STYLE_OPERATION,
        Button::Equals => STYLE_EQUALS,
        Button::Delete | Button::AllClear => STYLE_CLEAR,
    }
}

// ============================================================================
// TESTS
// ============================================================================
