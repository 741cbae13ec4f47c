use std::borrow::Cow;
use std::num::{ParseFloatError, ParseIntError};

/// Drop `_` digit separators.
fn strip_separators(s: &str) -> Cow<'_, str> {
    if s.contains('_') { Cow::Owned(s.replace('_', "")) } else { Cow::Borrowed(s) }
}

/// Parse a decimal integer literal, sign and separators allowed.
pub fn int(s: &str) -> Result<i64, ParseIntError> {
    strip_separators(s).parse()
}

/// Parse a single hexadecimal digit (or run of them).
pub fn hex(s: &str) -> Result<i64, ParseIntError> {
    i64::from_str_radix(s, 16)
}

/// Parse a float literal, sign, exponent and separators allowed.
pub fn float(s: &str) -> Result<f64, ParseFloatError> {
    strip_separators(s).parse()
}
