//! The input-driven calculation engine.
//!
//! Evaluates strictly left to right: `5 + 3 * 2 =` is `(5 + 3) * 2`.
//! Every token is processed to completion and no token can fail; arithmetic
//! errors land in the entry slot and the next digit or clear recovers.

use super::error::CalcError;
use super::evaluation::{evaluate, number_to_string, parse_number};
use super::format::{MAX_DIGITS, MAX_DISPLAY_WIDTH, format_entry};
use super::history::{History, MAX_HISTORY_SIZE};
use super::token::{MemoryOp, Operator, Token};
use tracing::{debug, trace, warn};

/// The value currently being entered or shown.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// Numeric text, built digit by digit or rendered from a result.
    Input(String),
    /// An arithmetic error in place of a number.
    Error(CalcError),
}

impl Entry {
    fn zero() -> Self {
        Self::Input("0".to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Numeric value of the entry; NaN for errors and unparsable text.
    pub fn value(&self) -> f64 {
        match self {
            Self::Input(text) => parse_number(text),
            Self::Error(_) => f64::NAN,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

/// Coarse view of where the engine is in a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No operation pending.
    Idle,
    /// An operator was accepted and the second operand has not started.
    OperatorPending,
    /// Digits of the second operand are being entered.
    Accumulating,
    /// The entry holds an error.
    Error,
}

/// Size limits for an engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum entry length in characters, also the display width.
    pub max_digits: usize,
    /// Number of completed calculations kept in history.
    pub history_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
            history_size: MAX_HISTORY_SIZE,
        }
    }
}

/// A calculator instance: entry, pending operation, memory and history.
#[derive(Clone, Debug)]
pub struct Calculator {
    current: Entry,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
    memory: f64,
    history: History,
    max_digits: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            current: Entry::zero(),
            first_operand: None,
            operator: None,
            waiting_for_operand: false,
            memory: 0.0,
            history: History::with_capacity(limits.history_size),
            max_digits: limits.max_digits.clamp(1, MAX_DISPLAY_WIDTH),
        }
    }

    /// Process one token and return the formatted display.
    pub fn press(&mut self, token: Token) -> String {
        debug!(?token, state = ?self.state(), "dispatch");

        match token {
            Token::Digit(digit) => self.input_digit(digit),
            Token::Decimal => self.input_decimal(),
            Token::Operator(op) => self.handle_operator(op),
            Token::Equals => self.calculate_result(),
            Token::AllClear => self.reset(),
            Token::Backspace => self.backspace(),
            Token::Memory(op) => self.handle_memory(op),
        }

        self.display()
    }

    /// The current entry, formatted for display.
    pub fn display(&self) -> String {
        format_entry(&self.current, self.max_digits)
    }

    pub fn current(&self) -> &Entry {
        &self.current
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after an operator or equals, before the next operand starts.
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn state(&self) -> State {
        if self.current.is_error() {
            State::Error
        } else if self.operator.is_none() {
            State::Idle
        } else if self.waiting_for_operand {
            State::OperatorPending
        } else {
            State::Accumulating
        }
    }

    fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return;
        }
        let digit = char::from(b'0' + digit);

        self.recover_from_error();

        if self.waiting_for_operand {
            self.current = Entry::Input(digit.to_string());
            self.waiting_for_operand = false;
            return;
        }

        let Entry::Input(text) = &mut self.current else {
            return;
        };

        if text.as_str() == "0" {
            *text = digit.to_string();
        } else if text.chars().count() < self.max_digits {
            text.push(digit);
        } else {
            trace!(%digit, "entry full, digit dropped");
        }
    }

    fn input_decimal(&mut self) {
        self.recover_from_error();

        if self.waiting_for_operand {
            self.current = Entry::Input("0.".to_string());
            self.waiting_for_operand = false;
            return;
        }

        let Entry::Input(text) = &mut self.current else {
            return;
        };

        if !text.contains('.') && text.chars().count() < self.max_digits {
            text.push('.');
        }
    }

    fn handle_operator(&mut self, next: Operator) {
        if self.current.is_error() {
            return;
        }

        // Consecutive operators: the last one wins.
        if self.waiting_for_operand && self.operator.is_some() {
            debug!(operator = %next, "replacing pending operator");
            self.operator = Some(next);
            return;
        }

        let candidate = self.current.value();

        match (self.first_operand, self.operator) {
            (None, _) => self.first_operand = Some(candidate),
            (Some(left), Some(pending)) => match evaluate(left, pending, candidate) {
                Ok(result) => {
                    debug!(left, operator = %pending, right = candidate, result, "chained");
                    self.first_operand = Some(result);
                    self.current = Entry::Input(number_to_string(result));
                }
                Err(err) => {
                    self.fail(err);
                    return;
                }
            },
            (Some(_), None) => {}
        }

        self.operator = Some(next);
        self.waiting_for_operand = true;
    }

    fn calculate_result(&mut self) {
        if let (Some(left), Some(operator)) = (self.first_operand, self.operator)
            && !self.current.is_error()
        {
            let right = self.current.value();

            self.current = match evaluate(left, operator, right) {
                Ok(result) => {
                    self.history.record(left, operator, right, result);
                    Entry::Input(number_to_string(result))
                }
                Err(err) => {
                    debug!(%err, "evaluation failed");
                    Entry::Error(err)
                }
            };
            self.first_operand = None;
            self.operator = None;
        }

        self.waiting_for_operand = false;
    }

    fn reset(&mut self) {
        self.current = Entry::zero();
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_operand = false;
    }

    fn backspace(&mut self) {
        if self.waiting_for_operand {
            if !self.current.is_error() {
                self.current = Entry::zero();
            }
            return;
        }

        let Entry::Input(text) = &mut self.current else {
            return;
        };

        text.pop();
        if matches!(text.as_str(), "" | "-" | "-0") {
            *text = "0".to_string();
        }
    }

    fn handle_memory(&mut self, op: MemoryOp) {
        if self.current.is_error() {
            return;
        }

        let value = self.current.value();
        let updated = match op {
            MemoryOp::Store => value,
            MemoryOp::Add => self.memory + value,
            MemoryOp::Subtract => self.memory - value,
            MemoryOp::Clear => 0.0,
            MemoryOp::Recall => {
                self.current = Entry::Input(number_to_string(self.memory));
                self.waiting_for_operand = false;
                return;
            }
        };

        if updated.is_finite() {
            self.memory = updated;
        } else {
            warn!(?op, "memory update would not be finite, ignored");
        }
    }

    /// Show an error and drop any pending operation.
    fn fail(&mut self, err: CalcError) {
        debug!(%err, "evaluation failed");
        self.current = Entry::Error(err);
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_operand = false;
    }

    fn recover_from_error(&mut self) {
        if self.current.is_error() {
            self.current = Entry::zero();
        }
    }
}
