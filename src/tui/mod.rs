//! TUI module: interactive keypad in the terminal.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition)
//! - `keypad`: key grid geometry, focus movement, hit-testing
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: styles
//! - `run`: effects (terminal, input thread, event loop)

pub mod keypad;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
