//! Raw input accepted by [`Cpf::parse`](crate::Cpf::parse).
//!
//! Every variant converges to a single string before validation:
//! - text drops `.` and `-`
//! - sequences drop `.` and `-` elements and concatenate the rest
//! - integers are rendered in decimal, so leading zeros are gone and a
//!   negative sign is kept (and later rejected as a non-digit)

use std::borrow::Cow;

/// Separator characters permitted in text and sequence input.
pub const SEPARATORS: [char; 2] = ['.', '-'];

/// One element of a sequence input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A single character, usually a digit or a separator.
    Char(char),
    /// A number, rendered in decimal (`12` contributes `"12"`).
    Number(u64),
}

impl Element {
    fn is_separator(&self) -> bool {
        matches!(self, Element::Char(c) if SEPARATORS.contains(c))
    }

    fn push_to(&self, out: &mut String) {
        match self {
            Element::Char(c) => out.push(*c),
            Element::Number(n) => out.push_str(&n.to_string()),
        }
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Char(c)
    }
}

impl From<u8> for Element {
    fn from(n: u8) -> Self {
        Element::Number(u64::from(n))
    }
}

/// A candidate CPF in one of the accepted input shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCpf<'a> {
    Integer(i128),
    Text(Cow<'a, str>),
    Sequence(Vec<Element>),
}

impl RawCpf<'_> {
    /// Converts the input into the string that is validated.
    #[must_use]
    pub fn normalize(&self) -> String {
        match self {
            RawCpf::Integer(n) => n.to_string(),
            RawCpf::Text(s) => s.chars().filter(|c| !SEPARATORS.contains(c)).collect(),
            RawCpf::Sequence(elements) => {
                let mut out = String::with_capacity(elements.len());
                for element in elements.iter().filter(|e| !e.is_separator()) {
                    element.push_to(&mut out);
                }
                out
            }
        }
    }
}

impl<'a> From<&'a str> for RawCpf<'a> {
    fn from(s: &'a str) -> Self {
        RawCpf::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for RawCpf<'a> {
    fn from(s: &'a String) -> Self {
        RawCpf::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for RawCpf<'_> {
    fn from(s: String) -> Self {
        RawCpf::Text(Cow::Owned(s))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawCpf<'_> {
                fn from(n: $ty) -> Self {
                    RawCpf::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64);

impl From<Vec<Element>> for RawCpf<'_> {
    fn from(elements: Vec<Element>) -> Self {
        RawCpf::Sequence(elements)
    }
}

impl From<&[char]> for RawCpf<'_> {
    fn from(chars: &[char]) -> Self {
        RawCpf::Sequence(chars.iter().copied().map(Element::from).collect())
    }
}

impl From<Vec<char>> for RawCpf<'_> {
    fn from(chars: Vec<char>) -> Self {
        RawCpf::from(chars.as_slice())
    }
}

impl<const N: usize> From<[char; N]> for RawCpf<'_> {
    fn from(chars: [char; N]) -> Self {
        RawCpf::from(chars.as_slice())
    }
}

impl From<&[u8]> for RawCpf<'_> {
    fn from(digits: &[u8]) -> Self {
        RawCpf::Sequence(digits.iter().copied().map(Element::from).collect())
    }
}

impl From<Vec<u8>> for RawCpf<'_> {
    fn from(digits: Vec<u8>) -> Self {
        RawCpf::from(digits.as_slice())
    }
}

impl<const N: usize> From<[u8; N]> for RawCpf<'_> {
    fn from(digits: [u8; N]) -> Self {
        RawCpf::from(digits.as_slice())
    }
}
