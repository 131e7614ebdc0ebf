//! Binary arithmetic shared by the operator and equals paths.
//!
//! Evaluation never panics: every failure is reported as a [`CalcError`]
//! value, and results are rounded to hide binary floating-point noise.

use super::error::{CalcError, CalcResult};
use super::token::Operator;

/// Number of decimal places kept in every result.
const ROUNDING_PLACES: i32 = 10;

/// Evaluate `left op right`.
///
/// Checks run in a fixed order:
/// 1. a NaN operand is an invalid operation
/// 2. dividing by exactly zero is rejected before dividing
/// 3. a non-finite raw result is an overflow
/// 4. the result is rounded to ten decimal places
pub fn evaluate(left: f64, operator: Operator, right: f64) -> CalcResult<f64> {
    if left.is_nan() || right.is_nan() {
        return Err(CalcError::InvalidOperation);
    }

    if operator == Operator::Divide && right == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let raw = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
    };

    if !raw.is_finite() {
        return Err(CalcError::Overflow);
    }

    Ok(round_result(raw))
}

/// Round to ten decimal places, normalising negative zero.
fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(ROUNDING_PLACES);
    let scaled = value * scale;

    // Huge magnitudes have no fractional part left to round.
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };

    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Render a number the way it is held in the entry slot.
///
/// Uses the shortest decimal form that parses back to the same value.
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    value.to_string()
}

/// Parse an entry into a number, yielding NaN for anything unparsable.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}
