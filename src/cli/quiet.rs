//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts read from stdin only when it is a terminal and quiet mode is off.
pub fn skip_prompt() -> bool {
    enabled() || !std::io::stdin().is_tty()
}

/// Styled output only when stdout is a terminal.
pub fn styled() -> bool {
    std::io::stdout().is_tty()
}
