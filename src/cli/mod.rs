mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

use std::process::ExitCode;

use context::{CliError, Context};
use parse::{ParseError, parse};

/// Run the CLI and map the outcome to a process exit status.
pub fn run(args: Vec<String>) -> ExitCode {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(code) => code,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            if matches!(e, CliError::Parse(_)) {
                prompts::usage_hint();
            }
            ExitCode::from(e.exit_code())
        }
    }
}
