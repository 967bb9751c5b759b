//! Word-based passphrases.

use zeroize::Zeroizing;

use crate::rand::RandomSource;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphrasePolicy {
    pub word_count: usize,
    pub separator: String,
}

impl Default for PassphrasePolicy {
    fn default() -> Self {
        Self {
            word_count: 6,
            separator: "-".into(),
        }
    }
}

/// Draw `word_count` words uniformly from `words` and join them.
pub fn generate_passphrase<S, R>(
    policy: &PassphrasePolicy,
    words: &[S],
    rng: &mut R,
) -> Result<Zeroizing<String>>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    if policy.word_count == 0 {
        return Err(Error::InvalidPolicy("passphrase needs at least one word".into()));
    }
    if words.is_empty() {
        return Err(Error::InvalidPolicy("passphrase word list is empty".into()));
    }

    let mut phrase = Zeroizing::new(String::new());
    for n in 0..policy.word_count {
        if n > 0 {
            phrase.push_str(&policy.separator);
        }
        phrase.push_str(words[rng.uniform_int(words.len())?].as_ref());
    }
    Ok(phrase)
}

/// Bits for `word_count` uniform picks from a list of `list_len` words.
pub fn passphrase_entropy(word_count: usize, list_len: usize) -> f64 {
    if list_len == 0 {
        return 0.0;
    }
    word_count as f64 * (list_len as f64).log2()
}
