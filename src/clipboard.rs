//! Copying results to the system clipboard.

use crate::calculator::Entry;
use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Text to put on the clipboard for an entry: the raw number, unformatted.
///
/// Errors have nothing worth pasting and yield `None`.
pub fn clipboard_text(entry: &Entry) -> Option<&str> {
    match entry {
        Entry::Input(text) => Some(text),
        Entry::Error(_) => None,
    }
}

/// Clipboard handle opened on first use and then kept alive.
///
/// Some Wayland and X11 providers drop the contents once the owning handle
/// goes away, so one handle lives as long as the session.
#[derive(Default)]
pub struct ResultClipboard {
    clipboard: Option<Clipboard>,
}

impl ResultClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the entry's number. Returns `false` when there was nothing to copy.
    pub fn copy_entry(&mut self, entry: &Entry) -> Result<bool> {
        let Some(text) = clipboard_text(entry) else {
            debug!("not copying an error result");
            return Ok(false);
        };

        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access clipboard")?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        clipboard
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")?;
        Ok(true)
    }
}
