//! The validated CPF value type.

use crate::check::{self, CPF_LEN};
use crate::error::{AccessError, CpfError, InvalidReason};
use crate::input::RawCpf;

/// A valid CPF number.
///
/// Construction is the only place validation happens; an instance always
/// holds exactly eleven digits whose last two are the check digits of the
/// first nine, and never eleven copies of the same digit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Number of digits in every CPF.
    pub const LEN: usize = CPF_LEN;

    /// Parses and validates a CPF from any accepted input shape.
    ///
    /// ```
    /// use brdoc_cpf::Cpf;
    ///
    /// let a = Cpf::parse("290.571.393-32")?;
    /// let b = Cpf::parse(29057139332u64)?;
    /// assert_eq!(a, b);
    /// assert_eq!(a.formatted(), "290.571.393-32");
    /// # Ok::<(), brdoc_cpf::CpfError>(())
    /// ```
    pub fn parse<'a>(raw: impl Into<RawCpf<'a>>) -> Result<Self, CpfError> {
        Self::from_normalized(&raw.into().normalize())
    }

    fn from_normalized(s: &str) -> Result<Self, CpfError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpfError::OnlyDigits);
        }

        // all ASCII at this point, so bytes == chars
        if s.len() != CPF_LEN {
            return Err(CpfError::MaxDigits { len: s.len() });
        }

        let mut digits = [0u8; CPF_LEN];
        for (slot, b) in digits.iter_mut().zip(s.bytes()) {
            *slot = b - b'0';
        }

        Self::from_digits(digits)
    }

    /// Validates eleven already-split digits.
    ///
    /// Any value above 9 is rejected as [`CpfError::OnlyDigits`].
    pub fn from_digits(digits: [u8; CPF_LEN]) -> Result<Self, CpfError> {
        if digits.iter().any(|d| *d > 9) {
            return Err(CpfError::OnlyDigits);
        }

        if check::is_repeated(&digits) {
            return Err(CpfError::InvalidCpf {
                reason: InvalidReason::RepeatedDigits,
            });
        }

        if !check::verify(&digits) {
            return Err(CpfError::InvalidCpf {
                reason: InvalidReason::CheckDigitMismatch,
            });
        }

        Ok(Self(digits))
    }

    /// Returns the eleven digits.
    #[must_use]
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// Returns the digit at `index` (0-based).
    pub fn digit_at(&self, index: usize) -> Result<u8, AccessError> {
        self.0
            .get(index)
            .copied()
            .ok_or(AccessError::IndexOutOfRange {
                index,
                len: CPF_LEN,
            })
    }

    /// Always 11.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        CPF_LEN
    }

    /// Always true: invalid numbers fail at construction instead.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        true
    }

    /// Returns the two check digits.
    #[must_use]
    pub const fn check_digits(&self) -> [u8; 2] {
        [self.0[9], self.0[10]]
    }

    /// Iterates over the digits in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Formats as `DDD.DDD.DDD-DD`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(CPF_LEN + 3);
        for (i, d) in self.0.iter().enumerate() {
            match i {
                3 | 6 => out.push('.'),
                9 => out.push('-'),
                _ => {}
            }
            out.push(char::from(b'0' + d));
        }
        out
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cpf({self})")
    }
}

impl std::str::FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::ops::Index<usize> for Cpf {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[u8]> for Cpf {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Cpf {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<&str> for Cpf {
    type Error = CpfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<u64> for Cpf {
    type Error = CpfError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::parse(n)
    }
}

impl TryFrom<i64> for Cpf {
    type Error = CpfError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::parse(n)
    }
}

impl TryFrom<&[char]> for Cpf {
    type Error = CpfError;

    fn try_from(chars: &[char]) -> Result<Self, Self::Error> {
        Self::parse(chars)
    }
}

impl TryFrom<[u8; CPF_LEN]> for Cpf {
    type Error = CpfError;

    fn try_from(digits: [u8; CPF_LEN]) -> Result<Self, Self::Error> {
        Self::from_digits(digits)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.to_string()
    }
}

impl TryFrom<Cpf> for u64 {
    type Error = AccessError;

    fn try_from(_: Cpf) -> Result<Self, Self::Error> {
        Err(AccessError::IntegerConversion)
    }
}

impl TryFrom<Cpf> for i64 {
    type Error = AccessError;

    fn try_from(_: Cpf) -> Result<Self, Self::Error> {
        Err(AccessError::IntegerConversion)
    }
}

impl serde::Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CpfVisitor;

        impl serde::de::Visitor<'_> for CpfVisitor {
            type Value = Cpf;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a CPF as a string or integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Cpf, E> {
                Cpf::parse(v).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Cpf, E> {
                Cpf::parse(v).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Cpf, E> {
                Cpf::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(CpfVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::input::Element;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_known_valid() {
        let cpf = Cpf::parse("87234238115").unwrap();
        assert_eq!(cpf.to_string(), "87234238115");
        assert_eq!(cpf.digit_at(0), Ok(8));
        assert_eq!(cpf[10], 5);
        assert_eq!(cpf.len(), 11);
        assert!(cpf.is_valid());
        assert_eq!(cpf.check_digits(), [1, 5]);
    }

    #[test]
    fn test_equal_across_input_shapes() {
        let b = Cpf::parse("29057139332").unwrap();
        let c = Cpf::parse(29057139332u64).unwrap();
        let d = Cpf::parse("290.571.393-32").unwrap();
        let e = Cpf::parse(['2', '9', '0', '5', '7', '1', '3', '9', '3', '3', '2']).unwrap();
        let f = Cpf::parse([2u8, 9, 0, 5, 7, 1, 3, 9, 3, 3, 2]).unwrap();
        assert_eq!(b, c);
        assert_eq!(b, d);
        assert_eq!(b, e);
        assert_eq!(b, f);
        assert_eq!(c.formatted(), "290.571.393-32");
        assert_eq!(c[0], 2);
    }

    #[test]
    fn test_debug_repr() {
        let cpf: Cpf = "87234238115".parse().unwrap();
        assert_eq!(format!("{cpf:?}"), "Cpf(87234238115)");
    }

    #[test]
    fn test_leading_zero_needs_string() {
        // 012.345.678-90 is valid; as an integer the leading zero is lost.
        let cpf = Cpf::parse("012.345.678-90").unwrap();
        assert_eq!(cpf.to_string(), "01234567890");
        assert_eq!(
            Cpf::parse(1_234_567_890u64),
            Err(CpfError::MaxDigits { len: 10 })
        );
    }

    #[rstest]
    #[case::trailing_letter("2905713933X", ErrorKind::OnlyDigits)]
    #[case::empty("", ErrorKind::OnlyDigits)]
    #[case::only_separators("..--", ErrorKind::OnlyDigits)]
    #[case::space("290 571 393 32", ErrorKind::OnlyDigits)]
    #[case::non_ascii_digit("2905713933\u{0663}", ErrorKind::OnlyDigits)]
    #[case::letter_before_length("12X", ErrorKind::OnlyDigits)]
    #[case::too_short("123", ErrorKind::MaxDigits)]
    #[case::too_long("123456789012", ErrorKind::MaxDigits)]
    #[case::formatted_too_long("290.571.393-321", ErrorKind::MaxDigits)]
    #[case::bad_check_digit("87234238116", ErrorKind::InvalidIdentifier)]
    #[case::bad_first_check_digit("87234238105", ErrorKind::InvalidIdentifier)]
    #[case::ones("11111111111", ErrorKind::InvalidIdentifier)]
    #[case::zeros("000.000.000-00", ErrorKind::InvalidIdentifier)]
    fn test_rejects(#[case] input: &str, #[case] kind: ErrorKind) {
        let err = Cpf::parse(input).unwrap_err();
        assert_eq!(err.kind(), kind, "input {input:?} gave {err:?}");
    }

    #[test]
    fn test_repeated_digits_rejected_explicitly() {
        for d in 0..=9u8 {
            let s = char::from(b'0' + d).to_string().repeat(11);
            assert_eq!(
                Cpf::parse(s.as_str()),
                Err(CpfError::InvalidCpf {
                    reason: InvalidReason::RepeatedDigits
                })
            );
        }
    }

    #[test]
    fn test_checksum_mismatch_reason() {
        assert_eq!(
            Cpf::parse("87234238116"),
            Err(CpfError::InvalidCpf {
                reason: InvalidReason::CheckDigitMismatch
            })
        );
    }

    #[test]
    fn test_negative_integer_is_not_digits() {
        assert_eq!(Cpf::parse(-29057139332i64), Err(CpfError::OnlyDigits));
    }

    #[test]
    fn test_sequence_with_multi_digit_number() {
        let raw = vec![
            Element::Number(290),
            Element::Char('.'),
            Element::Number(571),
            Element::Char('.'),
            Element::Number(393),
            Element::Char('-'),
            Element::Number(32),
        ];
        assert_eq!(Cpf::parse(raw).unwrap().to_string(), "29057139332");
    }

    #[test]
    fn test_from_digits_rejects_out_of_range_digit() {
        assert_eq!(
            Cpf::from_digits([8, 7, 2, 3, 4, 2, 3, 8, 1, 1, 15]),
            Err(CpfError::OnlyDigits)
        );
    }

    #[test]
    fn test_digit_at_out_of_range() {
        let cpf = Cpf::parse("87234238115").unwrap();
        assert_eq!(
            cpf.digit_at(11),
            Err(AccessError::IndexOutOfRange { index: 11, len: 11 })
        );
        assert!(cpf.digit_at(usize::MAX).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let cpf = Cpf::parse("87234238115").unwrap();
        let _ = cpf[11];
    }

    #[test]
    fn test_integer_conversion_unsupported() {
        let cpf = Cpf::parse("87234238115").unwrap();
        assert_eq!(u64::try_from(cpf), Err(AccessError::IntegerConversion));
        assert_eq!(i64::try_from(cpf), Err(AccessError::IntegerConversion));
    }

    #[test]
    fn test_iter_matches_digits() {
        let cpf = Cpf::parse("87234238115").unwrap();
        let collected: Vec<u8> = cpf.iter().collect();
        assert_eq!(collected.as_slice(), cpf.digits());
        assert_eq!((&cpf).into_iter().count(), 11);
    }

    #[test]
    fn test_conversions() {
        let from_str = Cpf::try_from("290.571.393-32").unwrap();
        let from_string = Cpf::try_from(String::from("29057139332")).unwrap();
        let from_digits = Cpf::try_from([2u8, 9, 0, 5, 7, 1, 3, 9, 3, 3, 2]).unwrap();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str, from_digits);

        assert_eq!(String::from(from_str), "29057139332");
        let bytes: &[u8] = from_str.as_ref();
        assert_eq!(bytes, &[2, 9, 0, 5, 7, 1, 3, 9, 3, 3, 2]);

        assert!(Cpf::try_from([2u8, 9, 0, 5, 7, 1, 3, 9, 3, 3, 3]).unwrap_err().is_invalid());
        assert!(Cpf::try_from(String::from("123")).unwrap_err().is_length_error());
    }

    #[test]
    fn test_json_roundtrip() {
        let cpf = Cpf::parse("290.571.393-32").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"29057139332\"");
        let parsed: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(cpf, parsed);
    }

    #[test]
    fn test_json_accepts_formatted_and_integer() {
        let a: Cpf = serde_json::from_str("\"290.571.393-32\"").unwrap();
        let b: Cpf = serde_json::from_str("29057139332").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let err = serde_json::from_str::<Cpf>("\"87234238116\"").unwrap_err();
        assert!(err.to_string().contains("This CPF is invalid."));
    }

    fn valid_cpf() -> impl Strategy<Value = [u8; CPF_LEN]> {
        proptest::array::uniform9(0u8..=9)
            .prop_filter("repeated digits", |p| p.iter().any(|d| *d != p[0]))
            .prop_map(|prefix| {
                let [c1, c2] = check::check_digits(&prefix);
                let mut digits = [0u8; CPF_LEN];
                digits[..9].copy_from_slice(&prefix);
                digits[9] = c1;
                digits[10] = c2;
                digits
            })
    }

    fn to_text(digits: &[u8; CPF_LEN]) -> String {
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    proptest! {
        #[test]
        fn prop_display_roundtrip(digits in valid_cpf()) {
            let s = to_text(&digits);
            let cpf = Cpf::parse(s.as_str()).unwrap();
            prop_assert_eq!(cpf.to_string(), s);
            prop_assert_eq!(cpf.digits(), &digits);
        }

        #[test]
        fn prop_formatted_shape(digits in valid_cpf()) {
            let s = to_text(&digits);
            let formatted = Cpf::parse(s.as_str()).unwrap().formatted();
            let bytes = formatted.as_bytes();
            prop_assert_eq!(bytes.len(), 14);
            prop_assert_eq!(bytes[3], b'.');
            prop_assert_eq!(bytes[7], b'.');
            prop_assert_eq!(bytes[11], b'-');
            let stripped: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(&stripped, &s);
            prop_assert_eq!(Cpf::parse(formatted.as_str()).unwrap(), Cpf::parse(s.as_str()).unwrap());
        }

        #[test]
        fn prop_tampered_check_digit_rejected(digits in valid_cpf(), pos in 9usize..11, bump in 1u8..10) {
            let mut tampered = digits;
            tampered[pos] = (tampered[pos] + bump) % 10;
            let err = Cpf::from_digits(tampered).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        }
    }
}
