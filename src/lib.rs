//! Policy-constrained password generation and strength auditing.
//!
//! Passwords are built to satisfy a [`PasswordPolicy`] by construction, permuted
//! with a secure shuffle and rejected when they collide with a [`WeakTermIndex`].
//! The auditor scores an existing password against the same policy.

pub mod audit;
pub mod pass;
pub mod rand;
pub mod weak;

use thiserror::Error as ThisError;

pub use audit::{AuditReport, Criterion, Strength, Warning, audit};
pub use pass::charset::{CharClass, Charsets};
pub use pass::policy::PasswordPolicy;
pub use pass::{Generated, Generator};
pub use rand::{OsRandom, RandomSource};
pub use weak::{WeakTermIndex, WeakTermSources};

/// Errors surfaced by generation, auditing setup, and index loading.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Policy minimums exceed the length, length is zero, or a required
    /// class is empty.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// The secure entropy source failed. Never replaced with a weaker source.
    #[error("secure random source failed: {0}")]
    RandomSource(String),

    /// A weak-term list required by the policy could not be read.
    #[error("failed to load {list} list from '{path}': {source}")]
    IndexLoad {
        list: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Every attempt within the retry budget collided with a weak term.
    #[error("no acceptable password after {attempts} attempt(s)")]
    GenerationExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
