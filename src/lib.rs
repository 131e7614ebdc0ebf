//! zcalc: a keypad-driven calculator.
//!
//! The [`calculator`] module is the core: a token-driven engine evaluating
//! strictly left to right, plus display formatting. The remaining modules
//! adapt it to typed input, a config file and the system clipboard.

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod keymap;
pub mod session;
