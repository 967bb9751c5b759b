//! Terminal rendering for the CLI.

mod output;
mod report;

pub use report::{print_help, print_report};
