//! Character-class entropy estimate.
//!
//! `bits = length * log2(alphabet)` where the alphabet is the sum of the sizes
//! of the classes that actually occur in the password. This is an upper bound
//! that assumes every character was picked independently and uniformly from
//! that alphabet. User-chosen passwords rarely are, so treat the number as a
//! ceiling, not as measured information content.

use std::fmt;

use crate::pass::charset::observed_alphabet;

/// Bits for `length` uniform picks from an alphabet of `alphabet` symbols.
pub fn calculate_entropy(length: usize, alphabet: usize) -> f64 {
    if alphabet == 0 {
        return 0.0;
    }
    length as f64 * (alphabet as f64).log2()
}

/// Estimate for an arbitrary password. Length is counted in characters.
pub fn estimate_entropy(password: &str) -> f64 {
    calculate_entropy(password.chars().count(), observed_alphabet(password))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
