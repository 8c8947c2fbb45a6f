//! Keypad layout, focus navigation and mouse hit-testing.
//!
//! ```text
//! [   AC   ] [DEL] [ ÷ ]
//! [ 1 ] [ 2 ] [ 3 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ . ] [ 0 ] [   =    ]
//! ```
//!
//! Pure geometry over a fixed grid of four columns. Keys may span several
//! columns; focus is addressed as (row, key index within the row).

use ratatui::layout::Rect;

use crate::types::{Button, Operation};

/// A button placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub button: Button,
    /// Number of grid columns the key covers.
    pub span: u16,
}

const fn key(button: Button) -> Key {
    Key { button, span: 1 }
}

const fn wide(button: Button) -> Key {
    Key { button, span: 2 }
}

/// Grid width in columns.
pub const COLUMNS: u16 = 4;

/// Rows, top to bottom. Spans in every row add up to [`COLUMNS`].
pub const ROWS: [&[Key]; 5] = [
    &[
        wide(Button::AllClear),
        key(Button::Delete),
        key(Button::Operation(Operation::Divide)),
    ],
    &[
        key(Button::Digit(1)),
        key(Button::Digit(2)),
        key(Button::Digit(3)),
        key(Button::Operation(Operation::Multiply)),
    ],
    &[
        key(Button::Digit(4)),
        key(Button::Digit(5)),
        key(Button::Digit(6)),
        key(Button::Operation(Operation::Add)),
    ],
    &[
        key(Button::Digit(7)),
        key(Button::Digit(8)),
        key(Button::Digit(9)),
        key(Button::Operation(Operation::Subtract)),
    ],
    &[
        key(Button::Decimal),
        key(Button::Digit(0)),
        wide(Button::Equals),
    ],
];

/// Position of a key: row index and key index within that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub row: usize,
    pub index: usize,
}

impl Focus {
    pub const fn new(row: usize, index: usize) -> Self {
        Focus { row, index }
    }
}

/// Direction for focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The key at `focus`, if it exists.
pub fn key_at(focus: Focus) -> Option<Key> {
    ROWS.get(focus.row)?.get(focus.index).copied()
}

/// Where `button` sits on the keypad.
#[cfg(test)]
pub fn find(button: Button) -> Option<Focus> {
    ROWS.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|k| k.button == button)
            .map(|index| Focus::new(row, index))
    })
}

/// First grid column covered by the key at `focus`.
fn start_column(focus: Focus) -> u16 {
    ROWS.get(focus.row)
        .map(|keys| keys.iter().take(focus.index).map(|k| k.span).sum())
        .unwrap_or(0)
}

/// Key index in `row` covering grid column `column`.
fn index_covering(row: usize, column: u16) -> usize {
    let Some(keys) = ROWS.get(row) else {
        return 0;
    };

    let mut start = 0;
    for (index, k) in keys.iter().enumerate() {
        if column < start + k.span {
            return index;
        }
        start += k.span;
    }
    keys.len().saturating_sub(1)
}

/// Move focus one step, staying on the grid.
///
/// Vertical moves keep the grid column, so moving down from `DEL` lands on
/// `3` and moving up from `3` lands back on `DEL`.
pub fn move_focus(focus: Focus, direction: Direction) -> Focus {
    let row_len = ROWS.get(focus.row).map_or(0, |keys| keys.len());

    match direction {
        Direction::Left => Focus::new(focus.row, focus.index.saturating_sub(1)),
        Direction::Right => {
            Focus::new(focus.row, (focus.index + 1).min(row_len.saturating_sub(1)))
        }
        Direction::Up | Direction::Down => {
            let row = match direction {
                Direction::Up => focus.row.saturating_sub(1),
                _ => (focus.row + 1).min(ROWS.len() - 1),
            };
            Focus::new(row, index_covering(row, start_column(focus)))
        }
    }
}

/// Screen rectangles of every key within the keypad's inner area.
///
/// Column widths and row heights are the integer division of the area;
/// leftover cells stay empty on the right and bottom.
pub fn key_rects(area: Rect) -> Vec<(Focus, Rect)> {
    let cell_width = area.width / COLUMNS;
    let cell_height = area.height / ROWS.len() as u16;

    let mut rects = Vec::new();
    if cell_width == 0 || cell_height == 0 {
        return rects;
    }

    for (row, keys) in ROWS.iter().enumerate() {
        let mut column = 0;
        for (index, k) in keys.iter().enumerate() {
            let rect = Rect {
                x: area.x + column * cell_width,
                y: area.y + row as u16 * cell_height,
                width: k.span * cell_width,
                height: cell_height,
            };
            rects.push((Focus::new(row, index), rect));
            column += k.span;
        }
    }

    rects
}

/// The key under screen cell (`x`, `y`), if any.
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Focus> {
    key_rects(area)
        .into_iter()
        .find(|(_, rect)| {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
        .map(|(focus, _)| focus)
}
