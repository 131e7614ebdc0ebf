//! Display formatting for the calculator entry.
//!
//! Maps the current entry to a string no wider than the display allows.
//! Formatting is idempotent: feeding a formatted number back in yields the
//! same text.

use super::engine::Entry;
use super::evaluation::number_to_string;

/// Default display width in characters.
pub const MAX_DIGITS: usize = 12;

/// Widest display supported.
pub const MAX_DISPLAY_WIDTH: usize = 64;

/// Fractional mantissa digits used for scientific notation.
const EXPONENTIAL_DIGITS: usize = 6;

/// Smallest non-zero magnitude shown in fixed notation.
const MIN_FIXED_MAGNITUDE: f64 = 1e-6;

/// Format an entry for display.
pub fn format_entry(entry: &Entry, max_digits: usize) -> String {
    match entry {
        Entry::Error(err) => err.to_string(),
        Entry::Input(text) => format_text(text, max_digits),
    }
}

/// Format a number for display.
pub fn format_number(value: f64, max_digits: usize) -> String {
    format_text(&number_to_string(value), max_digits)
}

fn format_text(text: &str, max_digits: usize) -> String {
    let Ok(value) = text.parse::<f64>() else {
        return text.to_string();
    };

    // Text already in scientific form stays there.
    if text.contains(['e', 'E']) {
        return to_exponential(value, EXPONENTIAL_DIGITS);
    }

    let magnitude = value.abs();
    let max_digits = max_digits.clamp(1, MAX_DISPLAY_WIDTH);

    if magnitude >= 10f64.powi(max_digits as i32)
        || (magnitude > 0.0 && magnitude < MIN_FIXED_MAGNITUDE)
    {
        return to_exponential(value, EXPONENTIAL_DIGITS);
    }

    if text.chars().count() > max_digits {
        return to_precision(value, max_digits);
    }

    text.to_string()
}

/// Scientific notation with a fixed number of fractional mantissa digits,
/// e.g. `1.234568e+13`.
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let formatted = format!("{:.*e}", fraction_digits, value);
    let (mantissa, exponent) = split_exponent(&formatted);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{}", mantissa, sign, exponent.abs())
}

/// Render with `precision` significant digits, dropping trailing zeros.
///
/// Values whose rounded exponent no longer fits fixed notation fall back to
/// the same scientific form the magnitude rules use.
fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let (_, exponent) = split_exponent(&format!("{:.*e}", precision - 1, value));

    if exponent < -6 || exponent >= precision as i32 {
        return to_exponential(value, EXPONENTIAL_DIGITS);
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    trim_fraction(&fixed)
}

fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn trim_fraction(fixed: &str) -> String {
    if fixed.contains('.') {
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        fixed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcError;

    fn input(text: &str) -> Entry {
        Entry::Input(text.to_string())
    }

    #[test]
    fn test_errors_verbatim() {
        assert_eq!(
            format_entry(&Entry::Error(CalcError::DivisionByZero), MAX_DIGITS),
            "Cannot divide by zero"
        );
        assert_eq!(
            format_entry(&Entry::Error(CalcError::Overflow), MAX_DIGITS),
            "Number too large"
        );
    }

    #[test]
    fn test_plain_text_kept() {
        assert_eq!(format_entry(&input("0"), MAX_DIGITS), "0");
        assert_eq!(format_entry(&input("0."), MAX_DIGITS), "0.");
        assert_eq!(format_entry(&input("12.50"), MAX_DIGITS), "12.50");
        assert_eq!(format_entry(&input("0.000000"), MAX_DIGITS), "0.000000");
    }

    #[test]
    fn test_large_values_use_exponential() {
        assert_eq!(format_number(1e12, MAX_DIGITS), "1.000000e+12");
        assert_eq!(format_number(12345678901234.0, MAX_DIGITS), "1.234568e+13");
        assert_eq!(format_number(-5e20, MAX_DIGITS), "-5.000000e+20");
    }

    #[test]
    fn test_tiny_values_use_exponential() {
        assert_eq!(format_number(0.0000001, MAX_DIGITS), "1.000000e-7");
        assert_eq!(format_number(-0.00000025, MAX_DIGITS), "-2.500000e-7");
        assert_eq!(format_number(0.000001, MAX_DIGITS), "0.000001");
    }

    #[test]
    fn test_long_text_rendered_with_precision() {
        assert_eq!(
            format_number(123456.1234567891, MAX_DIGITS),
            "123456.123457"
        );
        assert_eq!(format_number(-0.3333333333, MAX_DIGITS), "-0.3333333333");
        assert_eq!(format_number(1.0000000001, 8), "1");
    }

    #[test]
    fn test_precision_rounding_up_to_limit_goes_exponential() {
        assert_eq!(format_number(999999999999.9, MAX_DIGITS), "1.000000e+12");
    }

    #[test]
    fn test_exponential_text_kept_exponential() {
        let once = format_number(9.9999999e-7, 8);
        assert_eq!(once, "1.000000e-6");
        assert_eq!(format_entry(&input(&once), 8), once);
        assert_eq!(format_entry(&input("1.5e3"), MAX_DIGITS), "1.500000e+3");
    }

    #[test]
    fn test_oversized_width_clamped() {
        assert_eq!(format_number(1.5, usize::MAX), "1.5");
        assert_eq!(format_number(1e70, usize::MAX), "1.000000e+70");
    }

    #[test]
    fn test_idempotent() {
        let values = [
            0.0,
            0.3,
            -2.5,
            42.0,
            1e12,
            12345678901234.0,
            0.0000001,
            123456.1234567891,
            -0.3333333333,
            999999999999.9,
            0.0001234567891234,
        ];

        for value in values {
            let once = format_number(value, MAX_DIGITS);
            let twice = format_entry(&input(&once), MAX_DIGITS);
            assert_eq!(once, twice, "formatting {} is not idempotent", value);
        }
    }
}
