//! CLI context - bundles settings, flags, and clipboard state.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use policypass::pass::{PassphrasePolicy, generate_passphrase};
use policypass::{Error as CoreError, Generator, OsRandom, PasswordPolicy, WeakTermIndex, audit};

use super::flags::{CliFlags, Mode};
use super::{ParseError, prompts, quiet};
use crate::settings::Settings;
use crate::terminal;

/// Exit status when an audited password fails a criterion or trips a warning.
pub const AUDIT_FAILED: u8 = 3;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Parse(_) => 2,
            _ => 1,
        }
    }

    fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| CliError::Io { context, source }
    }
}

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, CliError> {
        let flags = super::parse(&args)?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<ExitCode, CliError> {
        if self.flags.help {
            terminal::print_help();
            return Ok(ExitCode::SUCCESS);
        }
        if self.flags.version {
            println!("policypass {}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }

        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save();

        let policy = self.settings.policy();
        policy.validate()?;

        match self.flags.mode {
            Mode::Audit => self.run_audit(&policy),
            Mode::Generate => {
                if !self.setup_clipboard() {
                    return Ok(ExitCode::SUCCESS);
                }
                if self.flags.passphrase.is_some() {
                    self.run_passphrase()?;
                } else {
                    self.run_generate(&policy)?;
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Apply CLI flags on top of the starting settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(n) = flags.length {
            settings.min_length = n;
        }
        if let Some(n) = flags.upper {
            settings.min_uppercase = n;
        }
        if let Some(n) = flags.lower {
            settings.min_lowercase = n;
        }
        if let Some(n) = flags.digits {
            settings.min_digit = n;
        }
        if let Some(n) = flags.special {
            settings.min_special = n;
        }
        if flags.exclude_similar {
            settings.exclude_similar = true;
        }
        if flags.alpha_lead {
            settings.alpha_lead = true;
        }
        if flags.min_entropy.is_some() {
            settings.min_entropy_bits = flags.min_entropy;
        }
        if let Some(n) = flags.number {
            settings.number_of_passwords = n;
        }
        if let Some(n) = flags.max_attempts {
            settings.max_attempts = n;
        }
        if let Some(ref path) = flags.common {
            settings.common_path = path.clone();
        }
        if let Some(ref path) = flags.dictionary {
            settings.dictionary_path = path.clone();
        }
        if let Some(ref path) = flags.wordlist {
            settings.wordlist_path = path.clone();
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(path) => {
                if !quiet::enabled() {
                    eprintln!("Settings saved \u{2192} {}", path.display());
                }
            }
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    /// Returns false when the user declines the terminal fallback.
    fn setup_clipboard(&mut self) -> bool {
        if !self.flags.clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    fn run_audit(&mut self, policy: &PasswordPolicy) -> Result<ExitCode, CliError> {
        let weak = WeakTermIndex::load(policy, &self.settings.sources())?;

        let password = match self.flags.password.take() {
            Some(p) => Zeroizing::new(p),
            None => prompts::read_password().map_err(CliError::io("reading password"))?,
        };

        let report = audit(&password, policy, &weak);
        if !quiet::enabled() {
            terminal::print_report(&report, policy, quiet::styled());
        }

        Ok(if report.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(AUDIT_FAILED)
        })
    }

    fn run_generate(&mut self, policy: &PasswordPolicy) -> Result<(), CliError> {
        let weak = WeakTermIndex::load(policy, &self.settings.sources())?;
        let generator =
            Generator::new(policy.clone())?.with_max_attempts(self.settings.max_attempts);
        let mut rng = OsRandom::new();
        let count = self.settings.number_of_passwords.max(1);

        let mut buffer = Zeroizing::new(String::new());
        for _ in 0..count {
            let generated = generator.generate(&weak, &mut rng).inspect_err(|e| {
                if matches!(e, CoreError::GenerationExhausted { .. }) {
                    prompts::exhausted_hint();
                }
            })?;
            tracing::debug!(attempts = generated.attempts, "password accepted");
            self.emit(&generated.password, &mut buffer)?;
        }
        self.finish(&mut buffer, count)
    }

    fn run_passphrase(&mut self) -> Result<(), CliError> {
        let path = self.settings.wordlist_path.clone();
        if path.is_empty() {
            return Err(CoreError::InvalidPolicy(
                "passphrase generation needs a word list (--wordlist FILE)".into(),
            )
            .into());
        }
        let words = read_words(&path)?;

        let policy = PassphrasePolicy {
            word_count: self.flags.passphrase.unwrap_or_default(),
            separator: self
                .flags
                .separator
                .clone()
                .unwrap_or_else(|| PassphrasePolicy::default().separator),
        };
        let mut rng = OsRandom::new();
        let count = self.settings.number_of_passwords.max(1);

        let mut buffer = Zeroizing::new(String::new());
        for _ in 0..count {
            let phrase = generate_passphrase(&policy, &words, &mut rng)?;
            self.emit(&phrase, &mut buffer)?;
        }
        self.finish(&mut buffer, count)
    }

    /// Print a password, or queue it when copying to the clipboard.
    fn emit(&self, password: &str, buffer: &mut String) -> Result<(), CliError> {
        if self.clipboard.is_some() {
            buffer.push_str(password);
            buffer.push('\n');
            return Ok(());
        }
        let mut line = Zeroizing::new(String::with_capacity(password.len() + 1));
        line.push_str(password);
        line.push('\n');
        io::stdout()
            .lock()
            .write_all(line.as_bytes())
            .map_err(CliError::io("writing password"))
    }

    fn finish(&mut self, buffer: &mut String, count: usize) -> Result<(), CliError> {
        let Some(ctx) = self.clipboard.as_mut() else {
            return io::stdout()
                .flush()
                .map_err(CliError::io("writing password"));
        };
        match ctx.set_contents(buffer.clone()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied(count);
            }
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
        buffer.zeroize();
        Ok(())
    }
}

fn read_words(path: &str) -> Result<Vec<String>, CliError> {
    let context = format!("reading word list '{path}'");
    let file = File::open(path).map_err(CliError::io(context.clone()))?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(CliError::io(context.clone()))?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
