use std::str::FromStr;

use thiserror::Error;

use super::flags::{CliFlags, Mode};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    if args.get(1).map(String::as_str) == Some("audit") {
        flags.mode = Mode::Audit;
        i = 2;
    }

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-x" | "--exclude-similar" => flags.exclude_similar = true,
            "--alpha-lead" => flags.alpha_lead = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-U" | "--upper" => flags.upper = Some(number(args, &mut i)?),
            "-L" | "--lower" => flags.lower = Some(number(args, &mut i)?),
            "-D" | "--digits" => flags.digits = Some(number(args, &mut i)?),
            "-S" | "--special" => flags.special = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--max-attempts" => flags.max_attempts = Some(number(args, &mut i)?),
            "--min-entropy" => flags.min_entropy = Some(number(args, &mut i)?),
            "-p" | "--passphrase" => flags.passphrase = Some(number(args, &mut i)?),
            "--common" => flags.common = Some(value(args, &mut i)?.to_string()),
            "--dictionary" => flags.dictionary = Some(value(args, &mut i)?.to_string()),
            "-w" | "--wordlist" => flags.wordlist = Some(value(args, &mut i)?.to_string()),
            "--separator" => flags.separator = Some(value(args, &mut i)?.to_string()),
            other if flags.mode == Mode::Audit
                && flags.password.is_none()
                && !other.starts_with('-') =>
            {
                flags.password = Some(other.to_string());
            }
            other => return Err(ParseError::UnknownArg(redact(other, &flags))),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance to the value following the flag at `i`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let flag = args[*i].clone();
    let raw = value(args, i)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        flag,
        value: raw.to_string(),
    })
}

/// Keep anything that may be the audited password out of error output. Until
/// a password has been captured, an unknown dash-prefixed argument may be it.
fn redact(arg: &str, flags: &CliFlags) -> String {
    if flags.mode != Mode::Audit {
        arg.to_string()
    } else if flags.password.is_none() && arg.starts_with('-') {
        "<unrecognised argument, possibly a password>".to_string()
    } else if !arg.starts_with('-') {
        "<extra positional argument>".to_string()
    } else {
        arg.to_string()
    }
}
