//! Line-driven front end for the calculator.
//!
//! Each input line is either a sequence of keys (see [`crate::keymap`]) or a
//! `:`-prefixed command. After every key line the current display is written
//! back, one line per input line.

use crate::calculator::{Calculator, Token, format_number};
use crate::clipboard::ResultClipboard;
use crate::config::Config;
use crate::keymap::parse_keys;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
keys:     0-9 . + - * / x = C/AC (clear) </BS/DEL (backspace)
memory:   MS (store) MR (recall) MC (clear) M+ M-
commands: :history :memory :help :quit";

/// What the session produced for one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Lines to show the user.
    Lines(Vec<String>),
    /// The user asked to leave.
    Quit,
}

/// A calculator plus front-end preferences.
pub struct Session {
    calculator: Calculator,
    copy_results: bool,
    clipboard: ResultClipboard,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::with_limits(config.limits()),
            copy_results: config.clipboard.copy_results,
            clipboard: ResultClipboard::new(),
        }
    }

    /// Override whether results are copied to the clipboard.
    pub fn with_copy_results(mut self, copy_results: bool) -> Self {
        self.copy_results = copy_results;
        self
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Feed keys through the calculator and return the resulting display.
    pub fn press_keys(&mut self, keys: &str) -> String {
        let parsed = parse_keys(keys);
        if !parsed.rejected.is_empty() {
            let rejected: String = parsed.rejected.iter().collect();
            warn!(%rejected, "ignoring unrecognised keys");
        }

        let mut display = self.calculator.display();
        for token in parsed.tokens {
            display = self.calculator.press(token);
            if token == Token::Equals && self.copy_results {
                self.copy_result();
            }
        }
        display
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();

        match line.strip_prefix(':') {
            Some(command) => self.command(command.trim()),
            None if line.is_empty() => Reply::Lines(Vec::new()),
            None => Reply::Lines(vec![self.press_keys(line)]),
        }
    }

    /// Run until end of input or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.calculator.display()).context("Failed to write output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line) {
                Reply::Lines(lines) => {
                    for text in lines {
                        writeln!(output, "{}", text).context("Failed to write output")?;
                    }
                    output.flush().context("Failed to flush output")?;
                }
                Reply::Quit => break,
            }
        }

        Ok(())
    }

    fn command(&self, command: &str) -> Reply {
        debug!(command, "session command");

        match command {
            "q" | "quit" | "exit" => Reply::Quit,
            "history" => Reply::Lines(self.history_lines()),
            "memory" => Reply::Lines(vec![format!(
                "M = {}",
                format_number(self.calculator.memory(), self.calculator.max_digits())
            )]),
            "help" => Reply::Lines(HELP.lines().map(str::to_string).collect()),
            other => Reply::Lines(vec![format!("Unknown command: :{}", other)]),
        }
    }

    fn history_lines(&self) -> Vec<String> {
        let history = self.calculator.history();
        if history.is_empty() {
            return vec!["(no history)".to_string()];
        }

        let max_digits = self.calculator.max_digits();
        history
            .iter()
            .map(|entry| {
                format!(
                    "{} = {}",
                    entry.expression(),
                    format_number(entry.result, max_digits)
                )
            })
            .collect()
    }

    fn copy_result(&mut self) {
        if let Err(err) = self.clipboard.copy_entry(self.calculator.current()) {
            warn!("{:#}", err);
        }
    }
}
