//! Validate command.

use anyhow::Result;
use brdoc_cpf::Cpf;
use clap::Args;
use serde::Serialize;
use tracing::info;

use super::{parse_value, CommandContext};
use crate::error::CliError;
use crate::output::{print_failure, print_single, print_success, OutputFormat};

/// Validate a CPF.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// CPF as digits, optionally with '.' and '-' separators.
    value: String,

    /// Treat the value as an integer (leading zeros are lost).
    #[arg(long)]
    as_integer: bool,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: &'static str,
    message: String,
}

impl ValidationReport {
    fn from_result(input: &str, result: &Result<Cpf, CliError>) -> Self {
        match result {
            Ok(cpf) => Self {
                input: input.to_string(),
                valid: true,
                cpf: Some(cpf.to_string()),
                formatted: Some(cpf.formatted()),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                cpf: None,
                formatted: None,
                error: Some(ErrorReport {
                    kind: match err {
                        CliError::Rejected { source, .. } => source.kind().code(),
                        _ => "bad_input",
                    },
                    message: err.to_string(),
                }),
            },
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let result = parse_value(&self.value, self.as_integer);

        match ctx.format {
            OutputFormat::Json => {
                print_single(&ValidationReport::from_result(&self.value, &result));
            }
            OutputFormat::Table => match &result {
                Ok(cpf) => print_success(&format!("{} ({})", cpf.formatted(), cpf)),
                Err(_) => print_failure(&self.value),
            },
        }

        let cpf = result?;
        info!(cpf = %cpf, "CPF valid");
        Ok(())
    }
}
