//! Selftest command.
//!
//! Known-answer cases run against the library; any mismatch fails the command.

use anyhow::Result;
use brdoc_cpf::{AccessError, Cpf, ErrorKind, RawCpf};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{info, warn};

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_output;

/// Run the built-in known-answer cases.
#[derive(Debug, Args)]
pub struct SelftestCommand {}

enum Expect {
    Canonical(&'static str),
    Formatted(&'static str),
    Rejected(ErrorKind),
    DigitAt(usize, Option<u8>),
}

struct Case {
    name: &'static str,
    input: RawCpf<'static>,
    expect: Expect,
}

#[derive(Debug, Serialize, Tabled)]
struct CaseRow {
    case: &'static str,
    expected: String,
    actual: String,
    result: &'static str,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "integer input",
            input: RawCpf::from(87234238115u64),
            expect: Expect::Canonical("87234238115"),
        },
        Case {
            name: "plain text",
            input: RawCpf::from("29057139332"),
            expect: Expect::Canonical("29057139332"),
        },
        Case {
            name: "formatted text",
            input: RawCpf::from("290.571.393-32"),
            expect: Expect::Canonical("29057139332"),
        },
        Case {
            name: "format from integer",
            input: RawCpf::from(29057139332u64),
            expect: Expect::Formatted("290.571.393-32"),
        },
        Case {
            name: "char sequence",
            input: RawCpf::from(vec!['0', '1', '2', '.', '3', '4', '5', '.', '6', '7', '8', '-', '9', '0']),
            expect: Expect::Canonical("01234567890"),
        },
        Case {
            name: "first digit",
            input: RawCpf::from("87234238115"),
            expect: Expect::DigitAt(0, Some(8)),
        },
        Case {
            name: "digit past end",
            input: RawCpf::from("87234238115"),
            expect: Expect::DigitAt(11, None),
        },
        Case {
            name: "non-digit",
            input: RawCpf::from("2905713933X"),
            expect: Expect::Rejected(ErrorKind::OnlyDigits),
        },
        Case {
            name: "too short",
            input: RawCpf::from("123"),
            expect: Expect::Rejected(ErrorKind::MaxDigits),
        },
        Case {
            name: "too long",
            input: RawCpf::from("123456789012"),
            expect: Expect::Rejected(ErrorKind::MaxDigits),
        },
        Case {
            name: "repeated digits",
            input: RawCpf::from("11111111111"),
            expect: Expect::Rejected(ErrorKind::InvalidIdentifier),
        },
        Case {
            name: "wrong check digit",
            input: RawCpf::from("87234238116"),
            expect: Expect::Rejected(ErrorKind::InvalidIdentifier),
        },
    ]
}

fn describe(result: &Result<Cpf, brdoc_cpf::CpfError>, expect: &Expect) -> (String, String) {
    let expected = match expect {
        Expect::Canonical(s) | Expect::Formatted(s) => (*s).to_string(),
        Expect::Rejected(kind) => kind.code().to_string(),
        Expect::DigitAt(i, Some(d)) => format!("[{i}] = {d}"),
        Expect::DigitAt(i, None) => format!("[{i}] out of range"),
    };

    let actual = match (result, expect) {
        (Err(e), _) => e.kind().code().to_string(),
        (Ok(cpf), Expect::Formatted(_)) => cpf.formatted(),
        (Ok(cpf), Expect::DigitAt(i, _)) => match cpf.digit_at(*i) {
            Ok(d) => format!("[{i}] = {d}"),
            Err(AccessError::IndexOutOfRange { .. }) => format!("[{i}] out of range"),
            Err(e) => e.to_string(),
        },
        (Ok(cpf), _) => cpf.to_string(),
    };

    (expected, actual)
}

fn run_cases() -> Vec<CaseRow> {
    cases()
        .into_iter()
        .map(|case| {
            let result = Cpf::parse(case.input);
            let (expected, actual) = describe(&result, &case.expect);
            let passed = expected == actual;
            if !passed {
                warn!(case = case.name, %expected, %actual, "selftest case failed");
            }
            CaseRow {
                case: case.name,
                expected,
                actual,
                result: if passed { "pass" } else { "FAIL" },
            }
        })
        .collect()
}

impl SelftestCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = run_cases();
        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|r| r.result != "pass").count();
        if failed > 0 {
            return Err(CliError::SelfTestFailed {
                failed,
                total: rows.len(),
            }
            .into());
        }

        info!(total = rows.len(), "selftest passed");
        Ok(())
    }
}
