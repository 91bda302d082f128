//! Format command.

use anyhow::Result;
use clap::Args;

use super::{parse_value, CommandContext};
use crate::output::{print_single, OutputFormat};

/// Print a CPF in display form.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// CPF as digits, optionally with '.' and '-' separators.
    value: String,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let cpf = parse_value(&self.value, false)?;

        match ctx.format {
            OutputFormat::Table => println!("{}", cpf.formatted()),
            OutputFormat::Json => print_single(&serde_json::json!({
                "cpf": cpf,
                "formatted": cpf.formatted(),
            })),
        }

        Ok(())
    }
}
