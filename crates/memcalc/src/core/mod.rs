//! Core calculator module
//!
//! Numeric conversions shared by every front-end, the memory register and
//! the default expression evaluator.

pub mod evaluator;
pub mod memory;
mod operations;
pub mod parser;

pub use memory::{Emphasis, MemoryIndicator, MemoryRegister};
pub use operations::Operation;

use thiserror::Error;

/// Result type for expression evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Literal shown in the display after a failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Evaluation failures reported by an [`evaluator::ExpressionEvaluator`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Empty (or whitespace-only) expression
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
}

/// Renders a number the way a browser converts a number to a string.
///
/// Whole numbers carry no fraction, fractions use the shortest digits that
/// round-trip, and magnitudes outside `[1e-6, 1e21)` switch to exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    format!("{value}")
}

/// Parses the display text as a number, yielding 0 when it holds none.
///
/// Reads the longest numeric prefix after leading whitespace, so `"2+3"`
/// parses as 2 and `"Error"` as 0. NaN and negative zero collapse to 0.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    let value = parse_leading_float(text).unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Returns the numeric prefix of `text`, or `None` when there is none
fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let unsigned = &trimmed[end..];
    if unsigned.starts_with("Infinity") {
        let negative = trimmed.starts_with('-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().ok()
}
