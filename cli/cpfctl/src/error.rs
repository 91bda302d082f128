//! Error handling and display for the CLI.

use brdoc_cpf::{CpfError, InvalidReason};
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' rejected: {source}")]
    Rejected {
        input: String,
        #[source]
        source: CpfError,
    },

    #[error("Value '{0}' is not an integer.")]
    NotAnInteger(String),

    #[error("Self-test failed: {failed} of {total} cases did not match.")]
    SelfTestFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create a rejection error for an input.
    pub fn rejected(input: impl Into<String>, source: CpfError) -> Self {
        Self::Rejected {
            input: input.into(),
            source,
        }
    }
}

/// Hint shown below an error, if any.
fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Rejected { source, .. } => Some(match source {
            CpfError::OnlyDigits => "Only digits plus '.' and '-' separators are accepted.",
            CpfError::MaxDigits { .. } => {
                "A CPF has 11 digits. Pass it as text to keep leading zeros."
            }
            CpfError::InvalidCpf {
                reason: InvalidReason::RepeatedDigits,
            } => "A CPF made of one repeated digit is never issued.",
            CpfError::InvalidCpf {
                reason: InvalidReason::CheckDigitMismatch,
            } => "Check for a mistyped digit; the check digits do not match.",
        }),
        CliError::NotAnInteger(_) => Some("Drop --as-integer to parse the value as text."),
        CliError::SelfTestFailed { .. } => None,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}
