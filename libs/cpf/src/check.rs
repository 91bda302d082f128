//! Modulo-11 check digit computation.

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of leading digits the check digits are derived from.
pub const PREFIX_LEN: usize = 9;

/// Derives the two check digits from the first nine digits.
///
/// Each round weights the working sequence of length `n` with `n + 1`
/// down to `2`, takes the sum modulo 11, and appends `0` when the
/// remainder is 0 or 1, otherwise `11 - remainder`. The first round
/// runs over nine digits, the second over ten.
#[must_use]
pub fn check_digits(prefix: &[u8; PREFIX_LEN]) -> [u8; 2] {
    debug_assert!(prefix.iter().all(|d| *d <= 9), "digits must be 0-9");

    let mut work = [0u8; CPF_LEN];
    work[..PREFIX_LEN].copy_from_slice(prefix);

    for n in PREFIX_LEN..CPF_LEN {
        let sum: u32 = work[..n]
            .iter()
            .enumerate()
            .map(|(i, v)| (n + 1 - i) as u32 * u32::from(*v))
            .sum();
        let r = sum % 11;
        work[n] = if r <= 1 { 0 } else { (11 - r) as u8 };
    }

    [work[PREFIX_LEN], work[PREFIX_LEN + 1]]
}

/// Returns true if the last two digits match the ones derived from the first nine.
#[must_use]
pub fn verify(digits: &[u8; CPF_LEN]) -> bool {
    let mut prefix = [0u8; PREFIX_LEN];
    prefix.copy_from_slice(&digits[..PREFIX_LEN]);
    check_digits(&prefix) == [digits[PREFIX_LEN], digits[PREFIX_LEN + 1]]
}

/// Returns true if every digit is the same.
#[must_use]
pub fn is_repeated(digits: &[u8; CPF_LEN]) -> bool {
    digits.iter().all(|d| *d == digits[0])
}
