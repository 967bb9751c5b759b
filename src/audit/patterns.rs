//! Literal pattern checks beyond the weak-term lists.

use crate::weak::WeakTermIndex;

/// Keyboard runs matched case-insensitively as substrings.
pub const KEYBOARD_RUNS: &[&str] = &[
    "qwerty", "qwertz", "azerty", "asdf", "zxcv", "qazwsx", "1qaz", "1234", "4321", "0987",
];

pub fn find_keyboard_run(password: &str) -> Option<&'static str> {
    let lower = password.to_ascii_lowercase();
    KEYBOARD_RUNS.iter().copied().find(|run| lower.contains(run))
}

/// Lowercase and map common leet substitutions back to letters.
pub fn normalize_leet(password: &str) -> String {
    password
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            '4' | '@' => 'a',
            '8' => 'b',
            '(' | '<' => 'c',
            '3' => 'e',
            '6' | '9' => 'g',
            '#' => 'h',
            '1' | '!' | '|' => 'i',
            '0' => 'o',
            '5' | '$' => 's',
            '7' | '+' => 't',
            '2' => 'z',
            other => other,
        })
        .collect()
}

/// Weak term hidden behind leet substitutions that the raw password does not
/// expose on its own. A case change alone is not a substitution.
pub fn find_leet_variant(password: &str, weak: &WeakTermIndex) -> Option<String> {
    let normalized = normalize_leet(password);
    if normalized == password.to_ascii_lowercase() {
        return None;
    }
    if weak.is_exact_match(&normalized) && !weak.is_exact_match(password) {
        return Some(normalized);
    }
    match weak.find_dictionary_word(&normalized) {
        Some(word) if !password.contains(word) => Some(word.to_string()),
        _ => None,
    }
}
