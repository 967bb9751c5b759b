//! Weak-term lookup: common passwords (exact) and dictionary words (substring).

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::pass::policy::PasswordPolicy;
use crate::{Error, Result};

/// File locations for the two term lists.
#[derive(Debug, Clone, Default)]
pub struct WeakTermSources {
    pub common: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
}

/// Read-only after construction; share it by reference across calls and threads.
#[derive(Debug, Clone, Default)]
pub struct WeakTermIndex {
    common: HashSet<String>,
    dictionary: Vec<String>,
}

impl WeakTermIndex {
    /// An index that rejects nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from in-memory terms. Empty terms are dropped: an empty dictionary
    /// entry would be a substring of every candidate.
    pub fn new<C, D>(common: C, dictionary: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            common: common
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
            dictionary: dictionary
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Build from line-oriented readers, one term per line.
    pub fn from_readers<C: BufRead, D: BufRead>(
        common: Option<C>,
        dictionary: Option<D>,
    ) -> Result<Self> {
        let common = match common {
            Some(r) => read_terms(r).map_err(|e| load_error("common-password", "<reader>", e))?,
            None => Vec::new(),
        };
        let dictionary = match dictionary {
            Some(r) => read_terms(r).map_err(|e| load_error("dictionary", "<reader>", e))?,
            None => Vec::new(),
        };
        Ok(Self::new(common, dictionary))
    }

    /// Load the lists the policy asks for.
    ///
    /// A list whose check is disabled is never opened, even when a path is
    /// given. A list whose check is enabled must have a readable path.
    pub fn load(policy: &PasswordPolicy, sources: &WeakTermSources) -> Result<Self> {
        let common = if policy.check_common {
            load_list("common-password", sources.common.as_deref())?
        } else {
            Vec::new()
        };
        let dictionary = if policy.check_dictionary {
            load_list("dictionary", sources.dictionary.as_deref())?
        } else {
            Vec::new()
        };
        Ok(Self::new(common, dictionary))
    }

    /// Case-sensitive exact membership in the common-password set.
    pub fn is_exact_match(&self, s: &str) -> bool {
        self.common.contains(s)
    }

    /// Any dictionary entry appears as a contiguous substring of `s`.
    pub fn contains_dictionary_word(&self, s: &str) -> bool {
        self.find_dictionary_word(s).is_some()
    }

    /// First dictionary entry (in list order) embedded in `s`.
    pub fn find_dictionary_word(&self, s: &str) -> Option<&str> {
        self.dictionary
            .iter()
            .find(|word| s.contains(word.as_str()))
            .map(String::as_str)
    }

    /// True when `s` collides with either list.
    pub fn is_weak(&self, s: &str) -> bool {
        self.is_exact_match(s) || self.contains_dictionary_word(s)
    }

    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.dictionary.is_empty()
    }
}

fn load_list(list: &'static str, path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Err(load_error(
            list,
            "<unset>",
            io::Error::new(io::ErrorKind::NotFound, "no file configured"),
        ));
    };
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|e| load_error(list, &shown, e))?;
    let terms = read_terms(BufReader::new(file)).map_err(|e| load_error(list, &shown, e))?;
    tracing::info!(list, path = %shown, terms = terms.len(), "loaded weak-term list");
    Ok(terms)
}

/// One term per line. Lines that are not valid UTF-8 are decoded lossily
/// rather than failing the whole list.
fn read_terms<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut terms = Vec::new();
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let term = String::from_utf8_lossy(line);
        if matches!(term, std::borrow::Cow::Owned(_)) {
            tracing::debug!(line = lineno, "non-UTF-8 weak term decoded lossily");
        }
        terms.push(term.into_owned());
    }
    Ok(terms)
}

fn load_error(list: &'static str, path: &str, source: io::Error) -> Error {
    Error::IndexLoad {
        list,
        path: path.to_string(),
        source,
    }
}
