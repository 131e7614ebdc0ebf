//! Input tokens understood by the calculator engine.
//!
//! Front ends translate raw key or button events into these tokens before
//! handing them to [`Calculator::press`](super::Calculator::press).

use serde::Serialize;
use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// The canonical symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its canonical symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operation on the memory register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// Replace the register with the current entry.
    Store,
    /// Copy the register into the current entry.
    Recall,
    /// Reset the register to zero.
    Clear,
    /// Add the current entry to the register.
    Add,
    /// Subtract the current entry from the register.
    Subtract,
}

/// A single keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    AllClear,
    Backspace,
    Memory(MemoryOp),
}

impl Token {
    /// Build a digit token, rejecting anything outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<MemoryOp> for Token {
    fn from(op: MemoryOp) -> Self {
        Self::Memory(op)
    }
}
