//! CLI commands.

mod digits;
mod format;
mod selftest;
mod validate;

use anyhow::Result;
use brdoc_cpf::{Cpf, RawCpf};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::CliError;
use crate::output::OutputFormat;

/// cpf - Validate and format CPF numbers.
#[derive(Debug, Parser)]
#[command(name = "cpf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, env = "CPF_OUTPUT", value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a CPF and show its canonical and formatted forms.
    Validate(validate::ValidateCommand),

    /// Print a CPF in DDD.DDD.DDD-DD form.
    Format(format::FormatCommand),

    /// List the digits of a CPF by position.
    Digits(digits::DigitsCommand),

    /// Run the built-in known-answer cases.
    Selftest(selftest::SelftestCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
        };

        match self.command {
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Digits(cmd) => cmd.run(&ctx),
            Commands::Selftest(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("cpf {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Parse a command-line value, optionally through the integer input path.
pub(crate) fn parse_value(value: &str, as_integer: bool) -> Result<Cpf, CliError> {
    let raw = if as_integer {
        let n: i128 = value
            .parse()
            .map_err(|_| CliError::NotAnInteger(value.to_string()))?;
        RawCpf::Integer(n)
    } else {
        RawCpf::from(value)
    };

    debug!(input = %value, as_integer, "parsing CPF");

    Cpf::parse(raw).map_err(|e| {
        debug!(input = %value, kind = %e.kind(), "CPF rejected");
        CliError::rejected(value, e)
    })
}
