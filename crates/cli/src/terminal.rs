//! Terminal implementations of the storefront UI capabilities.
//!
//! Alerts and navigation targets go to stdout. Confirmations read `y`/`n`
//! from stdin unless `--yes` was given. A reload marks the current view as
//! stale so the command can render it again.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::debug;

use amazin_storefront::ui::{Dialogs, Navigator, ToastId, ToastKind, ToastSurface};

/// Errors reading interactive input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before {0} was entered")]
    Closed(String),
}

/// Write one line to stdout. A closed stdout is not worth failing a
/// command over.
pub fn say(line: &str) {
    let _ = writeln!(io::stdout().lock(), "{line}");
}

/// Ask for a line of input.
///
/// # Errors
///
/// Returns an error if stdin fails or reaches end of input.
pub fn prompt(label: &str) -> Result<String, InputError> {
    {
        let mut out = io::stdout().lock();
        write!(out, "{label}: ")?;
        out.flush()?;
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(InputError::Closed(label.to_string()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Dialogs and navigation on a terminal.
#[derive(Debug, Default)]
pub struct TerminalUi {
    assume_yes: bool,
    reload_requested: AtomicBool,
}

impl TerminalUi {
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            reload_requested: AtomicBool::new(false),
        }
    }

    /// Whether a handler asked for the current view to be re-rendered,
    /// clearing the request.
    pub fn take_reload(&self) -> bool {
        self.reload_requested.swap(false, Ordering::SeqCst)
    }
}

impl Dialogs for TerminalUi {
    fn alert(&self, message: &str) {
        say(message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            debug!(question = %message, "Auto-confirmed");
            return true;
        }
        match prompt(&format!("{message} [y/N]")) {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                debug!(error = %e, "No answer, treating as declined");
                false
            }
        }
    }
}

impl Navigator for TerminalUi {
    fn reload(&self) {
        self.reload_requested.store(true, Ordering::SeqCst);
    }

    fn navigate(&self, url: &str) {
        say(&format!("-> {url}"));
    }
}

/// Toasts printed as a single tagged line.
///
/// A command may exit before the show transition fires, so the line is
/// written on insert.
#[derive(Debug, Default)]
pub struct TerminalToasts;

impl ToastSurface for TerminalToasts {
    fn insert(&self, id: ToastId, message: &str, kind: ToastKind) {
        debug!(toast_id = id, "Toast");
        say(&format!("[{kind}] {message}"));
    }

    fn show(&self, _id: ToastId) {}

    fn hide(&self, _id: ToastId) {}

    fn remove(&self, _id: ToastId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_confirms() {
        let ui = TerminalUi::new(true);
        assert!(ui.confirm("Remove this item from your cart?"));
    }

    #[test]
    fn test_reload_flag_is_taken_once() {
        let ui = TerminalUi::new(false);
        assert!(!ui.take_reload());
        ui.reload();
        assert!(ui.take_reload());
        assert!(!ui.take_reload());
    }
}
