//! pocket-calc: a four-function calculator with a two-line display.
//!
//! The [`calculator::Calculator`] state machine is independent of any
//! front end; [`display::refresh`] turns its state into display lines.

pub mod calculator;
pub mod display;
pub mod error;
pub mod format;
pub mod logging;
pub mod tui;
pub mod types;
