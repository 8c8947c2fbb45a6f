//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A reader thread forwards terminal events over an mpsc channel; the
//! event loop owns the calculator and handles one event to completion
//! before taking the next.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use super::keypad::{hit_test, Direction};
use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::{keypad_area, render};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Keys only navigate the keypad and quit; digits and operations are
/// entered by pressing keypad buttons.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveFocus(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveFocus(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveFocus(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveFocus(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressFocused),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to a press of the key under the cursor.
///
/// `screen` is the full terminal area of the last drawn frame.
pub fn map_mouse(mouse: MouseEvent, screen: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(keypad_area(screen), mouse.column, mouse.row).map(Action::PressAt)
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // focus, paste
                Err(_) => break,
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive calculator until the user quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(tx);
    info!("keypad session started");

    loop {
        // Render; the frame area drives mouse hit-testing
        let screen = terminal.draw(|frame| render(&app, frame))?.area;

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // reader thread gone
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, screen),
            AppEvent::Resize => None,
        };

        let Some(action) = action else {
            continue;
        };
        debug!(?action, "dispatch");

        match update(std::mem::take(&mut app), &action) {
            Transition::Continue(next) => app = next,
            Transition::Quit => break,
        }
    }

    info!("keypad session ended");
    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
