//! Centralized warning and prompt messages for CLI output.

use std::io::{BufRead, Write};

use crossterm::style::{Stylize, style};
use zeroize::Zeroizing;

use super::quiet;

/// Warning to stderr in yellow. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Error to stderr in red. Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn usage_hint() {
    eprintln!("Try 'policypass --help' for more information.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Read the password to audit from stdin. Prompts only on a terminal.
pub fn read_password() -> std::io::Result<Zeroizing<String>> {
    if !quiet::skip_prompt() {
        eprint!("Enter the password to be audited: ");
        let _ = std::io::stderr().flush();
    }

    let mut line = Zeroizing::new(String::new());
    std::io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

pub fn exhausted_hint() {
    warn("Hint: relax the policy, shorten the weak-term lists, or raise --max-attempts.");
}
