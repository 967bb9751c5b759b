//! Password and passphrase generation.

pub mod charset;
mod generate;
pub mod passphrase;
pub mod policy;

pub use generate::{DEFAULT_MAX_ATTEMPTS, Generated, Generator, generate};
pub use passphrase::{PassphrasePolicy, generate_passphrase, passphrase_entropy};
