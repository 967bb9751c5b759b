//! Policy-constrained password generation with weak-term rejection.

use std::fmt;

use zeroize::Zeroizing;

use super::charset::{CharClass, Charsets};
use super::policy::PasswordPolicy;
use crate::rand::{self, OsRandom, RandomSource};
use crate::weak::WeakTermIndex;
use crate::{Error, Result};

/// Retry budget before giving up on a policy/index pair.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

const REQUIRED_CLASSES: [CharClass; 4] = [
    CharClass::Upper,
    CharClass::Lower,
    CharClass::Digit,
    CharClass::Symbol,
];

/// An accepted password and how many candidates it took.
pub struct Generated {
    pub password: Zeroizing<String>,
    pub attempts: usize,
}

impl Generated {
    pub fn as_str(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("password", &"<redacted>")
            .field("attempts", &self.attempts)
            .finish()
    }
}

/// Builds passwords for one validated policy.
#[derive(Debug, Clone)]
pub struct Generator {
    policy: PasswordPolicy,
    charsets: Charsets,
    fill: Vec<char>,
    max_attempts: usize,
}

impl Generator {
    pub fn new(policy: PasswordPolicy) -> Result<Self> {
        let charsets = Charsets::new(policy.exclude_similar);
        Self::with_charsets(policy, charsets)
    }

    /// Use a custom class registry, e.g. one with extra confusables removed.
    pub fn with_charsets(policy: PasswordPolicy, charsets: Charsets) -> Result<Self> {
        policy.validate()?;

        for class in REQUIRED_CLASSES {
            if minimum(&policy, class) > 0 && charsets.class(class).is_empty() {
                return Err(Error::InvalidPolicy(format!(
                    "{class:?} characters are required but none are available"
                )));
            }
        }

        let fill = charsets.fill();
        if fill.is_empty() {
            return Err(Error::InvalidPolicy("character set is empty".into()));
        }

        Ok(Self {
            policy,
            charsets,
            fill,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Cap on candidates tried before `GenerationExhausted`. At least one.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn charsets(&self) -> &Charsets {
        &self.charsets
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate one password that clears `weak`.
    ///
    /// A rejected candidate is wiped and the next attempt starts from scratch,
    /// so retries never reuse parts of a rejected draw.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        weak: &WeakTermIndex,
        rng: &mut R,
    ) -> Result<Generated> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.candidate(rng)?;
            let mut password = Zeroizing::new(String::with_capacity(candidate.len()));
            password.extend(candidate.iter());
            drop(candidate);

            if weak.is_exact_match(&password) {
                tracing::debug!(attempt, "candidate rejected: common password");
                continue;
            }
            if weak.contains_dictionary_word(&password) {
                tracing::debug!(attempt, "candidate rejected: dictionary word");
                continue;
            }

            return Ok(Generated {
                password,
                attempts: attempt,
            });
        }

        tracing::warn!(
            attempts = self.max_attempts,
            length = self.policy.min_length,
            "password generation exhausted its retry budget"
        );
        Err(Error::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    pub fn generate_batch<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        weak: &WeakTermIndex,
        rng: &mut R,
    ) -> Result<Vec<Generated>> {
        (0..count).map(|_| self.generate(weak, rng)).collect()
    }

    fn candidate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Zeroizing<Vec<char>>> {
        let length = self.policy.min_length;
        let mut chars = Zeroizing::new(Vec::with_capacity(length));

        // Minimums are met by construction, not by counting afterwards.
        for class in REQUIRED_CLASSES {
            let set = self.charsets.class(class);
            for _ in 0..minimum(&self.policy, class) {
                chars.push(rand::choose(set, rng)?);
            }
        }

        for _ in chars.len()..length {
            chars.push(rand::choose(&self.fill, rng)?);
        }

        rand::shuffle(chars.as_mut_slice(), rng)?;

        if self.policy.alpha_lead {
            lead_with_letter(&mut chars);
        }

        Ok(chars)
    }
}

/// Generate one password with a fresh OS-backed source.
pub fn generate(policy: &PasswordPolicy, weak: &WeakTermIndex) -> Result<Zeroizing<String>> {
    let generator = Generator::new(policy.clone())?;
    let mut rng = OsRandom::new();
    Ok(generator.generate(weak, &mut rng)?.password)
}

fn minimum(policy: &PasswordPolicy, class: CharClass) -> usize {
    match class {
        CharClass::Upper => policy.min_uppercase,
        CharClass::Lower => policy.min_lowercase,
        CharClass::Digit => policy.min_digit,
        CharClass::Symbol => policy.min_special,
        CharClass::Other => 0,
    }
}

/// Rotate left until the first character is a letter. No-op without letters.
fn lead_with_letter(chars: &mut [char]) {
    if let Some(pos) = chars.iter().position(|c| c.is_ascii_alphabetic()) {
        chars.rotate_left(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_moves_first_letter_to_front() {
        let mut chars: Vec<char> = "12#aB".chars().collect();
        lead_with_letter(&mut chars);
        assert_eq!(chars.iter().collect::<String>(), "aB12#");
    }

    #[test]
    fn rotation_without_letters_is_noop() {
        let mut chars: Vec<char> = "12#".chars().collect();
        lead_with_letter(&mut chars);
        assert_eq!(chars.iter().collect::<String>(), "12#");
    }

    #[test]
    fn empty_required_class_is_invalid() {
        let policy = PasswordPolicy::default();
        let charsets =
            Charsets::new(false).without(&['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']);
        assert!(matches!(
            Generator::with_charsets(policy, charsets),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn max_attempts_floor_is_one() {
        let generator = Generator::new(PasswordPolicy::default())
            .unwrap()
            .with_max_attempts(0);
        assert_eq!(generator.max_attempts(), 1);
    }

    #[test]
    fn debug_redacts_password() {
        let generated = generate_with_os(&PasswordPolicy::default());
        let shown = format!("{generated:?}");
        assert!(!shown.contains(generated.as_str()));
        assert!(shown.contains("<redacted>"));
    }

    fn generate_with_os(policy: &PasswordPolicy) -> Generated {
        Generator::new(policy.clone())
            .unwrap()
            .generate(&WeakTermIndex::empty(), &mut OsRandom::new())
            .unwrap()
    }
}
