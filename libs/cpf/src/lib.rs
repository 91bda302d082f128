//! # brdoc-cpf
//!
//! Parsing, validation, and formatting of CPF numbers (Cadastro de Pessoas
//! Físicas, the Brazilian individual taxpayer registry).
//!
//! ## Format
//!
//! A CPF has 11 digits, usually written `XXX.XXX.XXX-XX`. The last two are
//! check digits derived from the first nine with a weighted modulo-11 sum.
//!
//! Examples:
//! - `872.342.381-15`
//! - `290.571.393-32`
//!
//! ## Design Principles
//!
//! - A [`Cpf`] can only be obtained through validation; there is no
//!   invalid instance
//! - Input may be text (with or without `.` / `-`), an integer, or a
//!   sequence of characters or digits
//! - The canonical form is the 11 digits with no separators
//! - A CPF never converts to an integer, since leading zeros would be lost
//!
//! ```
//! use brdoc_cpf::{Cpf, ErrorKind};
//!
//! let cpf: Cpf = "87234238115".parse()?;
//! assert_eq!(cpf.formatted(), "872.342.381-15");
//! assert_eq!(cpf.digit_at(0), Ok(8));
//!
//! let err = Cpf::parse("11111111111").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
//! # Ok::<(), brdoc_cpf::CpfError>(())
//! ```

mod check;
mod error;
mod input;
mod types;

pub use check::{check_digits, CPF_LEN, PREFIX_LEN};
pub use error::{AccessError, CpfError, ErrorKind, InvalidReason};
pub use input::{Element, RawCpf, SEPARATORS};
pub use types::Cpf;
