//! Fixed-width integer arithmetic with explicit failure

use crate::error::{rejected, OpError, Result};
use crate::integer::CheckedInteger;

/// Add two integers, signaling `ArithmeticOverflow` instead of wrapping
///
/// # Examples
///
/// ```
/// use checkops_core::{add_with_overflow_check, ErrorKind};
///
/// assert_eq!(add_with_overflow_check(1, 2), Ok(3));
/// assert_eq!(
///     add_with_overflow_check(i32::MAX, 1).unwrap_err().kind(),
///     ErrorKind::ArithmeticOverflow
/// );
/// ```
pub fn add_with_overflow_check<T: CheckedInteger>(lhs: T, rhs: T) -> Result<T> {
    let sum = lhs
        .checked_add(rhs)
        .ok_or(OpError::ArithmeticOverflow {
            operation: "addition",
            target: T::TYPE_NAME,
        })
        .map_err(rejected("add_with_overflow_check"))?;

    log::trace!("add_with_overflow_check({lhs}, {rhs}) -> {sum}");
    Ok(sum)
}

/// Divide two integers, truncating toward zero
///
/// A zero divisor signals `DivideByZero`. For signed types `MIN / -1` has no
/// representable quotient and signals `ArithmeticOverflow`.
pub fn divide_integers<T: CheckedInteger>(dividend: T, divisor: T) -> Result<T> {
    let quotient = checked_quotient(dividend, divisor).map_err(rejected("divide_integers"))?;
    log::trace!("divide_integers({dividend}, {divisor}) -> {quotient}");
    Ok(quotient)
}

fn checked_quotient<T: CheckedInteger>(dividend: T, divisor: T) -> Result<T> {
    if divisor == T::ZERO {
        return Err(OpError::DivideByZero {
            dividend: dividend.to_string(),
        });
    }

    dividend.checked_div(divisor).ok_or(OpError::ArithmeticOverflow {
        operation: "division",
        target: T::TYPE_NAME,
    })
}
