//! Strict parsers for configuration values.

pub mod integer;
pub mod size;

pub use integer::{parse_strict_u64, IntegerParseError};
pub use size::{parse_size, SizeParseError, Suffix};
