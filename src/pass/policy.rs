//! Password composition policy.

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digit: usize,
    pub min_special: usize,
    pub exclude_similar: bool,
    /// Audit-only entropy floor.
    pub min_entropy_bits: Option<f64>,
    /// The common-password list must be available.
    pub check_common: bool,
    /// The dictionary list must be available.
    pub check_dictionary: bool,
    /// Rotate generated passwords so they start with a letter.
    pub alpha_lead: bool,
}

impl PasswordPolicy {
    /// Sum of the class minimums, `None` when it overflows.
    pub fn required(&self) -> Option<usize> {
        self.min_uppercase
            .checked_add(self.min_lowercase)?
            .checked_add(self.min_digit)?
            .checked_add(self.min_special)
    }

    /// Reject policies that cannot be satisfied by any password.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(Error::InvalidPolicy("length must be positive".into()));
        }
        let Some(required) = self.required() else {
            return Err(Error::InvalidPolicy(
                "class minimums overflow the maximum length".into(),
            ));
        };
        if required > self.min_length {
            return Err(Error::InvalidPolicy(format!(
                "class minimums sum to {required}, more than length {}",
                self.min_length
            )));
        }
        if let Some(bits) = self.min_entropy_bits
            && !(bits.is_finite() && bits >= 0.0)
        {
            return Err(Error::InvalidPolicy(format!(
                "entropy floor must be a non-negative number, got {bits}"
            )));
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 16,
            min_uppercase: 1,
            min_lowercase: 1,
            min_digit: 1,
            min_special: 1,
            exclude_similar: false,
            min_entropy_bits: None,
            check_common: false,
            check_dictionary: false,
            alpha_lead: false,
        }
    }
}
