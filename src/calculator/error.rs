//! Arithmetic error kinds.

use thiserror::Error;

/// Errors produced while evaluating an operation.
///
/// These are held as values in the calculator's entry slot rather than
/// propagated: the engine stays usable after any of them.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Number too large")]
    Overflow,
}

/// Result type for arithmetic evaluation.
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::InvalidOperation.to_string(), "Invalid operation");
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::Overflow.to_string(), "Number too large");
    }
}
