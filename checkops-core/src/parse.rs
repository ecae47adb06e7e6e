//! Integer parsing from numeric text
//!
//! A literal is an optional `+`/`-` sign followed by ASCII digits, with
//! optional surrounding whitespace. Anything else is a [`FormatError`]; a
//! well-formed literal that does not fit the target width is an
//! [`ArithmeticOverflow`].
//!
//! [`FormatError`]: crate::ErrorKind::FormatError
//! [`ArithmeticOverflow`]: crate::ErrorKind::ArithmeticOverflow

use crate::error::{rejected, OpError, Result};
use crate::integer::CheckedInteger;
use core::num::IntErrorKind;

/// Parse `text` as an integer of width `T`
///
/// # Examples
///
/// ```
/// use checkops_core::{parse_integer, ErrorKind};
///
/// assert_eq!(parse_integer::<i32>("3"), Ok(3));
/// assert_eq!(parse_integer::<i32>(" -42 "), Ok(-42));
///
/// let err = parse_integer::<i32>("3,, ssdd11").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::FormatError);
/// ```
pub fn parse_integer<T: CheckedInteger>(text: &str) -> Result<T> {
    let value = parse_literal(text).map_err(rejected("parse_integer"))?;
    log::trace!("parse_integer({text:?}) -> {value}");
    Ok(value)
}

/// Parse without logging; shared with the lookup operations
pub(crate) fn parse_literal<T: CheckedInteger>(text: &str) -> Result<T> {
    let literal = text.trim_matches(is_literal_whitespace);

    literal.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OpError::ArithmeticOverflow {
            operation: "parsing",
            target: T::TYPE_NAME,
        },
        _ => OpError::FormatError {
            input: text.to_owned(),
            target: T::TYPE_NAME,
        },
    })
}

fn is_literal_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ')
}
