//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` lays out the title, the two-line display, the keypad and
//! the help line. The display lines come from [`crate::display::refresh`],
//! the same adapter the headless command uses.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::display::refresh;

use super::keypad::{key_at, key_rects};
use super::state::App;
use super::theme;

const TITLE: &str = "pocket-calc";

const HELP: &str = "[click] press  [←↓↑→/hjkl] move  [Enter/Space] press focused  [q] quit";

/// Regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub help: Rect,
}

/// Split the terminal area: title, display (two lines plus border),
/// keypad filling the rest, help at the bottom.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(4), // display
        Constraint::Min(0),    // keypad
        Constraint::Length(1), // help
    ])
    .split(area);

    ScreenLayout {
        title: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        help: chunks[3],
    }
}

/// Area inside the keypad border, where keys are laid out.
///
/// The event loop uses this to hit-test mouse clicks against the same
/// geometry the keys are drawn with.
pub fn keypad_area(area: Rect) -> Rect {
    keypad_block().inner(layout(area).keypad)
}

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let regions = layout(area);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, theme::STYLE_TITLE)),
        regions.title,
    );
    render_display(app, frame, regions.display);
    render_keypad(app, frame, regions.keypad);
    frame.render_widget(
        Paragraph::new(Span::styled(HELP, theme::STYLE_HELP)),
        regions.help,
    );
}

// ============================================================================
// DISPLAY
// ============================================================================

fn render_display(app: &App, frame: &mut Frame, area: Rect) {
    let lines = refresh(&app.calculator);

    let paragraph = Paragraph::new(vec![
        Line::styled(lines.previous, theme::STYLE_PREVIOUS),
        Line::styled(lines.current, theme::STYLE_CURRENT),
    ])
    .alignment(Alignment::Right)
    .block(Block::bordered().border_style(theme::STYLE_DISPLAY_BORDER));

    frame.render_widget(paragraph, area);
}

// ============================================================================
// KEYPAD
// ============================================================================

fn keypad_block() -> Block<'static> {
    Block::bordered().border_style(theme::STYLE_DISPLAY_BORDER)
}

fn render_keypad(app: &App, frame: &mut Frame, area: Rect) {
    let block = keypad_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (focus, rect) in key_rects(inner) {
        let Some(key) = key_at(focus) else {
            continue;
        };

        let base = theme::key_style(key.button);
        let style = if focus == app.focus {
            theme::STYLE_FOCUSED
        } else if app.last_pressed == Some(key.button) {
            base.patch(theme::STYLE_PRESSED)
        } else {
            base
        };

        if rect.width >= 3 && rect.height >= 3 {
            frame.render_widget(Block::bordered().border_style(style), rect);
        }

        let label_row = Rect {
            x: rect.x,
            y: rect.y + rect.height / 2,
            width: rect.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::styled(key.button.label(), style)).alignment(Alignment::Center),
            label_row,
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
