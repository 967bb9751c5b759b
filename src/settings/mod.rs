//! Persisted default policy and weak-term sources.

mod file;

use std::path::PathBuf;

use policypass::pass::DEFAULT_MAX_ATTEMPTS;
use policypass::{PasswordPolicy, WeakTermSources};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub min_length: usize,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digit: usize,
    pub min_special: usize,
    pub exclude_similar: bool,
    pub alpha_lead: bool,
    pub min_entropy_bits: Option<f64>,
    pub number_of_passwords: usize,
    pub max_attempts: usize,
    pub common_path: String,
    pub dictionary_path: String,
    pub wordlist_path: String,
}

impl Settings {
    pub fn load_from_file() -> std::io::Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        file::save(self)
    }

    /// A configured list path turns the matching check on.
    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_length,
            min_uppercase: self.min_uppercase,
            min_lowercase: self.min_lowercase,
            min_digit: self.min_digit,
            min_special: self.min_special,
            exclude_similar: self.exclude_similar,
            min_entropy_bits: self.min_entropy_bits,
            check_common: !self.common_path.is_empty(),
            check_dictionary: !self.dictionary_path.is_empty(),
            alpha_lead: self.alpha_lead,
        }
    }

    pub fn sources(&self) -> WeakTermSources {
        let path = |p: &str| (!p.is_empty()).then(|| PathBuf::from(p));
        WeakTermSources {
            common: path(&self.common_path),
            dictionary: path(&self.dictionary_path),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let policy = PasswordPolicy::default();
        Self {
            min_length: policy.min_length,
            min_uppercase: policy.min_uppercase,
            min_lowercase: policy.min_lowercase,
            min_digit: policy.min_digit,
            min_special: policy.min_special,
            exclude_similar: policy.exclude_similar,
            alpha_lead: policy.alpha_lead,
            min_entropy_bits: policy.min_entropy_bits,
            number_of_passwords: 1,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            common_path: String::new(),
            dictionary_path: String::new(),
            wordlist_path: String::new(),
        }
    }
}
