//! Display adapter: calculator state → two display lines.
//!
//! Pure functions: (Calculator, OutputFormat) → String.
//! Callers refresh after every transition; the calculator never renders.

use serde::Serialize;

use crate::calculator::Calculator;
use crate::error::Result;
use crate::format::format_operand;
use crate::types::{Operand, Operation, OutputFormat};

/// The two text regions of the display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Previous operand and pending operation, e.g. `"1,234 +"`.
    /// Empty when no operation is pending.
    pub previous: String,
    /// The operand being typed, or the last result.
    pub current: String,
}

/// Raw calculator fields, unformatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operation>,
}

impl Snapshot {
    pub fn of(calculator: &Calculator) -> Self {
        Snapshot {
            current_operand: raw_text(calculator.current_operand()),
            previous_operand: calculator.previous_operand().map(raw_text).unwrap_or_default(),
            operation: calculator.operation(),
        }
    }
}

/// Operand text without grouping. Non-finite results use the display symbols.
fn raw_text(operand: &Operand) -> String {
    operand.text().unwrap_or_else(|| format_operand(operand))
}

/// Compute both display lines from the current state.
pub fn refresh(calculator: &Calculator) -> DisplayLines {
    let current = format_operand(calculator.current_operand());

    let previous = match calculator.pending() {
        Some(pending) => format!(
            "{} {}",
            format_operand(&pending.operand),
            pending.operation.symbol()
        ),
        None => String::new(),
    };

    DisplayLines { previous, current }
}

/// Render the display for headless output.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_display(calculator: &Calculator, format: OutputFormat) -> Result<String> {
    let lines = refresh(calculator);

    match format {
        OutputFormat::Human => Ok(format_human(&lines)),
        OutputFormat::Json => format_json(&lines, &Snapshot::of(calculator)),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(lines: &DisplayLines) -> String {
    format!("{}\n{}\n", lines.previous, lines.current)
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct JsonDisplay<'a> {
    previous: &'a str,
    current: &'a str,
    state: &'a Snapshot,
}

fn format_json(lines: &DisplayLines, snapshot: &Snapshot) -> Result<String> {
    let body = JsonDisplay {
        previous: &lines.previous,
        current: &lines.current,
        state: snapshot,
    };
    let mut out = serde_json::to_string_pretty(&body)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
