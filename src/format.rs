//! Number formatting for the display.
//!
//! Pure functions: operand text in, display string out. No I/O.

use crate::types::Operand;

/// Digit grouping convention.
///
/// The calculator renders in one fixed locale; this struct only names
/// the constants so the grouping routine does not hard-code them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Symbol between digit groups of the integer part.
    pub grouping_separator: char,
    /// Symbol between the integer and fractional parts.
    pub decimal_point: char,
    /// Number of digits per group.
    pub group_size: usize,
}

impl Locale {
    /// English: `1,234,567.89`.
    pub const EN: Locale = Locale {
        grouping_separator: ',',
        decimal_point: '.',
        group_size: 3,
    };
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN
    }
}

/// Display strings for results with no digits.
const INFINITY_DISPLAY: &str = "∞";
const NEG_INFINITY_DISPLAY: &str = "-∞";
const NAN_DISPLAY: &str = "NaN";

/// Format operand text for the display in the fixed English locale.
///
/// - `"1234567"` → `"1,234,567"`
/// - `"1234."` → `"1,234."` (trailing point kept while typing)
/// - `"1234.5"` → `"1,234.5"`
/// - `""` → `""`
pub fn format_for_display(text: &str) -> String {
    format_for_display_in(text, &Locale::EN)
}

/// Format operand text using an explicit locale.
///
/// The integer part is grouped only if it reads as a number; otherwise it
/// renders empty. Fractional digits are appended verbatim, never grouped.
pub fn format_for_display_in(text: &str, locale: &Locale) -> String {
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let mut out = format_integer(integer, locale).unwrap_or_default();

    if let Some(fraction) = fraction {
        out.push(locale.decimal_point);
        out.push_str(fraction);
    }

    out
}

/// Format an operand slot, including non-finite results.
pub fn format_operand(operand: &Operand) -> String {
    match operand {
        Operand::Value(value) if value.is_nan() => NAN_DISPLAY.to_string(),
        Operand::Value(value) if *value == f64::INFINITY => INFINITY_DISPLAY.to_string(),
        Operand::Value(value) if *value == f64::NEG_INFINITY => NEG_INFINITY_DISPLAY.to_string(),
        other => format_for_display(&other.text().unwrap_or_default()),
    }
}

/// Insert `separator` between groups of `size` digits, counting from the right.
pub fn group_digits(digits: &str, separator: char, size: usize) -> String {
    if size == 0 {
        return digits.to_string();
    }

    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / size);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

// ============================================================================
// INTERNAL
// ============================================================================

/// Grouped integer part, or `None` when the text is not an integer.
///
/// Leading zeros collapse (`"007"` → `"7"`) and a minus sign survives,
/// including on zero.
fn format_integer(integer: &str, locale: &Locale) -> Option<String> {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    Some(format!(
        "{}{}",
        sign,
        group_digits(significant, locale.grouping_separator, locale.group_size)
    ))
}

// ============================================================================
// TESTS
// ============================================================================
