//! Calculator core.
//!
//! This module provides:
//! - The token vocabulary front ends translate key presses into
//! - The engine that turns a token stream into a running calculation
//! - Display formatting for the current entry

mod engine;
mod error;
mod evaluation;
mod format;
mod history;
mod token;

pub use engine::{Calculator, Entry, Limits, State};
pub use error::{CalcError, CalcResult};
pub use evaluation::evaluate;
pub use format::{MAX_DIGITS, MAX_DISPLAY_WIDTH, format_entry, format_number};
pub use history::{History, HistoryEntry, MAX_HISTORY_SIZE};
pub use token::{MemoryOp, Operator, Token};
