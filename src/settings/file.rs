//! Settings file persistence.
//!
//! One comma-separated line. `|` escapes a literal `,` or `|` inside a field.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use super::Settings;

const FIELDS: usize = 13;

pub fn save(settings: &Settings) -> std::io::Result<PathBuf> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.min_length,
        settings.min_uppercase,
        settings.min_lowercase,
        settings.min_digit,
        settings.min_special,
        settings.exclude_similar,
        settings.alpha_lead,
        settings.min_entropy_bits.map(|b| b.to_string()).unwrap_or_default(),
        settings.number_of_passwords,
        settings.max_attempts,
        escape(&settings.common_path),
        escape(&settings.dictionary_path),
        escape(&settings.wordlist_path),
    );

    file.write_all(data.as_bytes())?;
    tracing::debug!(path = %path.display(), "saved settings");
    Ok(path)
}

/// Missing file keeps the defaults. A malformed line is skipped field by field.
pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        return Ok(());
    }

    let mut reader = BufReader::new(File::open(&path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELDS {
        tracing::warn!(
            path = %path.display(),
            fields = parts.len(),
            "ignoring malformed settings file"
        );
        return Ok(());
    }

    settings.min_length = parts[0].parse().unwrap_or(settings.min_length);
    settings.min_uppercase = parts[1].parse().unwrap_or(settings.min_uppercase);
    settings.min_lowercase = parts[2].parse().unwrap_or(settings.min_lowercase);
    settings.min_digit = parts[3].parse().unwrap_or(settings.min_digit);
    settings.min_special = parts[4].parse().unwrap_or(settings.min_special);
    settings.exclude_similar = parts[5].parse().unwrap_or(settings.exclude_similar);
    settings.alpha_lead = parts[6].parse().unwrap_or(settings.alpha_lead);
    settings.min_entropy_bits = parts[7].parse().ok();
    settings.number_of_passwords = parts[8].parse().unwrap_or(settings.number_of_passwords);
    settings.max_attempts = parts[9].parse().unwrap_or(settings.max_attempts);
    settings.common_path = parts[10].clone();
    settings.dictionary_path = parts[11].clone();
    settings.wordlist_path = parts[12].clone();

    Ok(())
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/policypass/settings")
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
