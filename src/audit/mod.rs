//! Password strength auditing against a policy.

mod entropy;
mod patterns;

pub use entropy::{Strength, calculate_entropy, estimate_entropy};
pub use patterns::{KEYBOARD_RUNS, find_keyboard_run, find_leet_variant, normalize_leet};

use std::collections::BTreeMap;
use std::fmt;

use crate::pass::charset::{CharClass, classify};
use crate::pass::policy::PasswordPolicy;
use crate::weak::WeakTermIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Entropy,
}

impl Criterion {
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digit => "digit",
            Criterion::Special => "special",
            Criterion::Entropy => "entropy",
        }
    }

    pub fn suggestion(self) -> &'static str {
        match self {
            Criterion::Length => "Increase the length of your password.",
            Criterion::Uppercase => "Use more uppercase characters.",
            Criterion::Lowercase => "Use more lowercase characters.",
            Criterion::Digit => "Use more digits.",
            Criterion::Special => "Use more special characters.",
            Criterion::Entropy => "Mix more character classes or add length.",
        }
    }
}

/// Weak-material findings, reported next to the criteria rather than folded
/// into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    CommonPassword,
    DictionaryWord(String),
    KeyboardPattern(&'static str),
    LeetVariant(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::CommonPassword => write!(f, "The password is a common password."),
            Warning::DictionaryWord(w) => {
                write!(f, "The password contains the dictionary word '{w}'.")
            }
            Warning::KeyboardPattern(p) => {
                write!(f, "The password contains the keyboard pattern '{p}'.")
            }
            Warning::LeetVariant(w) => {
                write!(f, "The password is a leet-speak variant of '{w}'.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub upper: usize,
    pub lower: usize,
    pub digit: usize,
    pub special: usize,
    pub other: usize,
}

impl ClassCounts {
    pub fn of(password: &str) -> Self {
        let mut counts = Self::default();
        for c in password.chars() {
            match classify(c) {
                CharClass::Upper => counts.upper += 1,
                CharClass::Lower => counts.lower += 1,
                CharClass::Digit => counts.digit += 1,
                CharClass::Symbol => counts.special += 1,
                CharClass::Other => counts.other += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    criteria: BTreeMap<Criterion, bool>,
    counts: ClassCounts,
    length: usize,
    entropy_bits: f64,
    warnings: Vec<Warning>,
}

impl AuditReport {
    /// Criteria in a stable order.
    pub fn criteria(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        self.criteria.iter().map(|(&c, &ok)| (c, ok))
    }

    /// `None` when the criterion was not evaluated.
    pub fn passed(&self, criterion: Criterion) -> Option<bool> {
        self.criteria.get(&criterion).copied()
    }

    pub fn all_passed(&self) -> bool {
        self.criteria.values().all(|&ok| ok)
    }

    pub fn failed(&self) -> Vec<Criterion> {
        self.criteria()
            .filter(|&(_, ok)| !ok)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        self.failed().into_iter().map(Criterion::suggestion).collect()
    }

    pub fn counts(&self) -> ClassCounts {
        self.counts
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn strength(&self) -> Strength {
        Strength::from_bits(self.entropy_bits)
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// No failed criterion and no warning.
    pub fn is_clean(&self) -> bool {
        self.all_passed() && self.warnings.is_empty()
    }
}

/// Score `password` against `policy` and `weak`. Never fails, whatever the input.
pub fn audit(password: &str, policy: &PasswordPolicy, weak: &WeakTermIndex) -> AuditReport {
    let counts = ClassCounts::of(password);
    let length = password.chars().count();
    let entropy_bits = estimate_entropy(password);

    let mut criteria = BTreeMap::new();
    criteria.insert(Criterion::Length, length >= policy.min_length);
    criteria.insert(Criterion::Uppercase, counts.upper >= policy.min_uppercase);
    criteria.insert(Criterion::Lowercase, counts.lower >= policy.min_lowercase);
    criteria.insert(Criterion::Digit, counts.digit >= policy.min_digit);
    criteria.insert(Criterion::Special, counts.special >= policy.min_special);
    if let Some(floor) = policy.min_entropy_bits {
        criteria.insert(Criterion::Entropy, entropy_bits >= floor);
    }

    let mut warnings = Vec::new();
    if weak.is_exact_match(password) {
        warnings.push(Warning::CommonPassword);
    }
    if let Some(word) = weak.find_dictionary_word(password) {
        warnings.push(Warning::DictionaryWord(word.to_string()));
    }
    if let Some(run) = find_keyboard_run(password) {
        warnings.push(Warning::KeyboardPattern(run));
    }
    if let Some(term) = find_leet_variant(password, weak) {
        warnings.push(Warning::LeetVariant(term));
    }

    tracing::debug!(
        length,
        entropy_bits,
        failed = criteria.values().filter(|ok| !**ok).count(),
        warnings = warnings.len(),
        "audited password"
    );

    AuditReport {
        criteria,
        counts,
        length,
        entropy_bits,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_class() {
        let counts = ClassCounts::of("AAb12!?  é");
        assert_eq!(
            counts,
            ClassCounts {
                upper: 2,
                lower: 1,
                digit: 2,
                special: 2,
                other: 3,
            }
        );
    }

    #[test]
    fn entropy_criterion_only_when_requested() {
        let weak = WeakTermIndex::empty();
        let report = audit("Ab1!", &PasswordPolicy::default(), &weak);
        assert_eq!(report.passed(Criterion::Entropy), None);

        let policy = PasswordPolicy {
            min_entropy_bits: Some(60.0),
            ..Default::default()
        };
        let report = audit("Ab1!", &policy, &weak);
        assert_eq!(report.passed(Criterion::Entropy), Some(false));
        assert!(report.suggestions().contains(&Criterion::Entropy.suggestion()));
    }

    #[test]
    fn criteria_are_ordered() {
        let report = audit("", &PasswordPolicy::default(), &WeakTermIndex::empty());
        let labels: Vec<&str> = report.criteria().map(|(c, _)| c.label()).collect();
        assert_eq!(
            labels,
            ["length", "uppercase", "lowercase", "digit", "special"]
        );
    }
}
