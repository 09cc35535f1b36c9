use std::fmt;

use super::integer::{leading_digits, parse_digits};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeParseError {
    #[error("Size string has no leading digits")]
    NoLeadingDigits,
    #[error("Unrecognized size suffix")]
    UnrecognizedSuffix,
    #[error("Size does not fit in 64 bits")]
    Overflow,
}

/// Unit suffix of a size string. Single letters are binary units, two letter
/// forms ending in `b` are decimal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    Bytes,
    K,
    KB,
    M,
    MB,
    G,
    GB,
    T,
    TB,
}

impl Suffix {
    pub const ALL: [Suffix; 9] = [
        Suffix::Bytes,
        Suffix::K,
        Suffix::KB,
        Suffix::M,
        Suffix::MB,
        Suffix::G,
        Suffix::GB,
        Suffix::T,
        Suffix::TB,
    ];

    pub const fn multiplier(self) -> u64 {
        match self {
            Suffix::Bytes => 1,
            Suffix::K => 1 << 10,
            Suffix::KB => 1_000,
            Suffix::M => 1 << 20,
            Suffix::MB => 1_000_000,
            Suffix::G => 1 << 30,
            Suffix::GB => 1_000_000_000,
            Suffix::T => 1 << 40,
            Suffix::TB => 1_000_000_000_000,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Suffix::Bytes => "",
            Suffix::K => "k",
            Suffix::KB => "kb",
            Suffix::M => "m",
            Suffix::MB => "mb",
            Suffix::G => "g",
            Suffix::GB => "gb",
            Suffix::T => "t",
            Suffix::TB => "tb",
        }
    }

    /// Matches the whole of `text` against the known suffixes, ignoring ASCII
    /// case. An empty string is [`Suffix::Bytes`].
    pub fn parse(text: &str) -> Result<Self, SizeParseError> {
        Suffix::ALL
            .into_iter()
            .find(|suffix| suffix.as_str().eq_ignore_ascii_case(text))
            .ok_or(SizeParseError::UnrecognizedSuffix)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a byte count such as `512`, `32m` or `4GB`.
pub fn parse_size(text: &str) -> Result<u64, SizeParseError> {
    let digit_count = leading_digits(text);
    if digit_count == 0 {
        return Err(SizeParseError::NoLeadingDigits);
    }
    let (digits, rest) = text.split_at(digit_count);
    let magnitude = parse_digits(digits).ok_or(SizeParseError::Overflow)?;
    let multiplier = Suffix::parse(rest)?.multiplier();

    if magnitude != 0 && multiplier > u64::MAX / magnitude {
        return Err(SizeParseError::Overflow);
    }
    Ok(magnitude * multiplier)
}
