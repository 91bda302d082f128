//! Digits command.

use anyhow::Result;
use brdoc_cpf::{Cpf, PREFIX_LEN};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::{parse_value, CommandContext};
use crate::output::print_output;

/// List the digits of a CPF.
#[derive(Debug, Args)]
pub struct DigitsCommand {
    /// CPF as digits, optionally with '.' and '-' separators.
    value: String,
}

#[derive(Debug, Serialize, Tabled)]
struct DigitRow {
    position: usize,
    digit: u8,
    role: &'static str,
}

fn rows(cpf: &Cpf) -> Vec<DigitRow> {
    cpf.iter()
        .enumerate()
        .map(|(position, digit)| DigitRow {
            position,
            digit,
            role: if position < PREFIX_LEN { "base" } else { "check" },
        })
        .collect()
}

impl DigitsCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let cpf = parse_value(&self.value, false)?;
        print_output(&rows(&cpf), ctx.format);
        Ok(())
    }
}
