//! Text transforms

use crate::error::{rejected, OpError, Result};

/// Reverse the characters of `text`
///
/// Reversal works on Unicode scalar values, so multi-byte characters stay
/// intact. An absent `text` signals [`NullInput`](crate::ErrorKind::NullInput).
pub fn reverse_text(text: Option<&str>) -> Result<String> {
    let text = text
        .ok_or(OpError::NullInput { name: "text" })
        .map_err(rejected("reverse_text"))?;

    Ok(text.chars().rev().collect())
}
