/// Digit count of `u64::MAX` (18446744073709551615).
pub const MAX_DIGITS: usize = 20;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerParseError {
    #[error("Empty integer string")]
    Empty,
    #[error("Integer string longer than 20 characters")]
    TooLarge,
    #[error("Not all characters were numeric")]
    InvalidCharacter,
    #[error("Integer does not fit in 64 bits")]
    Overflow,
}

/// Parses a string made only of decimal digits. No sign, whitespace or suffix
/// is accepted.
pub fn parse_strict_u64(text: &str) -> Result<u64, IntegerParseError> {
    if text.is_empty() {
        return Err(IntegerParseError::Empty);
    }
    if text.len() > MAX_DIGITS {
        return Err(IntegerParseError::TooLarge);
    }
    if !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(IntegerParseError::InvalidCharacter);
    }
    parse_digits(text).ok_or(IntegerParseError::Overflow)
}

/// Folds an all-digit string into a `u64`, returning `None` on overflow.
pub(crate) fn parse_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |value, byte| {
        debug_assert!(byte.is_ascii_digit());
        value.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
    })
}

/// Length of the leading run of ASCII digits in `text`.
pub(crate) fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(|byte| byte.is_ascii_digit()).count()
}
