use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod settings;
mod terminal;

fn main() -> ExitCode {
    disable_core_dumps();
    init_logging();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

/// Log to stderr, filtered by `POLICYPASS_LOG` (default: warn).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("POLICYPASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
