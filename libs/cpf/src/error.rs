//! Error types for CPF parsing and access.

use thiserror::Error;

/// Why a digit-correct, length-correct value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// All eleven digits are the same (`00000000000` .. `99999999999`).
    RepeatedDigits,

    /// The last two digits do not match the ones derived from the first nine.
    CheckDigitMismatch,
}

/// Coarse classification of a [`CpfError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OnlyDigits,
    MaxDigits,
    InvalidIdentifier,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::OnlyDigits => "only_digits",
            ErrorKind::MaxDigits => "max_digits",
            ErrorKind::InvalidIdentifier => "invalid_cpf",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors that can occur when constructing a [`Cpf`](crate::Cpf).
///
/// Checks run in a fixed order and the first failure wins: digits, then
/// length, then repeated digits, then check digits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpfError {
    /// The normalized input contains something other than ASCII digits.
    #[error("CPF requires only digits. You can use '.' and '-' in long format values.")]
    OnlyDigits,

    /// The normalized input does not have exactly 11 digits.
    #[error("CPF requires 11 digits or 14 characters (got {len} digits)")]
    MaxDigits { len: usize },

    /// The digits do not form a valid CPF.
    #[error("This CPF is invalid.")]
    InvalidCpf { reason: InvalidReason },
}

impl CpfError {
    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CpfError::OnlyDigits => ErrorKind::OnlyDigits,
            CpfError::MaxDigits { .. } => ErrorKind::MaxDigits,
            CpfError::InvalidCpf { .. } => ErrorKind::InvalidIdentifier,
        }
    }

    /// Returns true if the input had characters other than digits and separators.
    pub fn is_only_digits(&self) -> bool {
        matches!(self, CpfError::OnlyDigits)
    }

    /// Returns true if the input had the wrong number of digits.
    pub fn is_length_error(&self) -> bool {
        matches!(self, CpfError::MaxDigits { .. })
    }

    /// Returns true if the input was well-formed but not a valid CPF.
    pub fn is_invalid(&self) -> bool {
        matches!(self, CpfError::InvalidCpf { .. })
    }
}

/// Errors from read access on an already valid CPF.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// Digit position past the end.
    #[error("digit index {index} out of range for CPF of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A CPF is never converted to an integer; leading zeros would be lost.
    #[error("CPF can't be represented as integer because of leading zeroes")]
    IntegerConversion,
}
