//! Audit report and help rendering.

use crossterm::style::{Stylize, style};

use policypass::audit::{AuditReport, Criterion};
use policypass::PasswordPolicy;

use super::output::{box_bottom, box_line, box_line_center, box_opt, box_top};

fn required(policy: &PasswordPolicy, criterion: Criterion) -> String {
    match criterion {
        Criterion::Length => policy.min_length.to_string(),
        Criterion::Uppercase => policy.min_uppercase.to_string(),
        Criterion::Lowercase => policy.min_lowercase.to_string(),
        Criterion::Digit => policy.min_digit.to_string(),
        Criterion::Special => policy.min_special.to_string(),
        Criterion::Entropy => policy
            .min_entropy_bits
            .map(|b| format!("{b:.1}"))
            .unwrap_or_default(),
    }
}

fn observed(report: &AuditReport, criterion: Criterion) -> String {
    let counts = report.counts();
    match criterion {
        Criterion::Length => report.length().to_string(),
        Criterion::Uppercase => counts.upper.to_string(),
        Criterion::Lowercase => counts.lower.to_string(),
        Criterion::Digit => counts.digit.to_string(),
        Criterion::Special => counts.special.to_string(),
        Criterion::Entropy => format!("{:.1}", report.entropy_bits()),
    }
}

fn mark(ok: bool, styled: bool) -> String {
    match (ok, styled) {
        (true, true) => style("PASS").green().to_string(),
        (false, true) => style("FAIL").red().to_string(),
        (true, false) => "PASS".to_string(),
        (false, false) => "FAIL".to_string(),
    }
}

pub fn print_report(report: &AuditReport, policy: &PasswordPolicy, styled: bool) {
    box_top("Audit");
    box_line(&format!(
        "{:.1} bits ({}) • {} characters",
        report.entropy_bits(),
        report.strength(),
        report.length()
    ));
    box_line("");

    for (criterion, ok) in report.criteria() {
        box_line(&format!(
            "[{}] {:<10} {:>6} / {}",
            mark(ok, styled),
            criterion.label(),
            observed(report, criterion),
            required(policy, criterion)
        ));
    }

    if !report.warnings().is_empty() {
        box_line("");
        box_line("Warnings:");
        for warning in report.warnings() {
            box_line(&format!("  ! {warning}"));
        }
    }

    let suggestions = report.suggestions();
    if !suggestions.is_empty() {
        box_line("");
        box_line("Suggestions:");
        for s in suggestions {
            box_line(&format!("  - {s}"));
        }
    }

    box_line("");
    box_line("Entropy assumes uniformly random characters; treat it as a ceiling.");
    box_bottom();
}

pub fn print_help() {
    box_top("Policypass");
    box_line_center("Policy-constrained password generator and auditor");
    box_line("");
    box_line("USAGE:");
    box_line("  policypass [OPTIONS]                 Generate passwords");
    box_line("  policypass audit [PASSWORD] [OPTIONS] Audit a password (stdin if");
    box_line("                                        PASSWORD is omitted)");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Policy:");
    box_opt("  -l, --length <N>", "Password length (default: 16)");
    box_opt("  -U, --upper <N>", "Minimum uppercase letters (default: 1)");
    box_opt("  -L, --lower <N>", "Minimum lowercase letters (default: 1)");
    box_opt("  -D, --digits <N>", "Minimum digits (default: 1)");
    box_opt("  -S, --special <N>", "Minimum special characters (default: 1)");
    box_opt("  -x, --exclude-similar", "Never generate O 0 I l 1");
    box_opt("      --alpha-lead", "Start generated passwords with a letter");
    box_opt("      --min-entropy <BITS>", "Audit: required entropy estimate");
    box_line("");
    box_line(" Weak terms:");
    box_opt("      --common <FILE>", "Reject exact matches from this list");
    box_opt("      --dictionary <FILE>", "Reject passwords containing any word from this list");
    box_opt("      --max-attempts <N>", "Retry budget before giving up (default: 10000)");
    box_line("");
    box_line(" Passphrase:");
    box_opt("  -p, --passphrase <WORDS>", "Generate a passphrase of WORDS words");
    box_opt("  -w, --wordlist <FILE>", "Words to draw from, one per line");
    box_opt("      --separator <SEP>", "Word separator (default: -)");
    box_line("");
    box_line(" Output:");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt("      --save", "Save the effective settings as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_line("  POLICYPASS_LOG   Log filter, e.g. debug (default: warn)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  policypass -l 12 -x              12 chars, no confusables");
    box_line("  policypass -n 5 --dictionary words.txt");
    box_line("  policypass audit 'Ab1!' -l 8     Audit against length 8");
    box_line("  policypass -p 6 -w words.txt     Six-word passphrase");
    box_line("");
    box_bottom();
    println!();
}
