//! Indexed access and prefix sums over sequences
//!
//! Indices are signed so that negative requests can be expressed and
//! rejected; a valid index lies in `[0, len)`.

use crate::error::{rejected, OpError, Result};
use crate::integer::CheckedInteger;

/// Get the element at `index`
///
/// # Examples
///
/// ```
/// use checkops_core::{get_element_at, ErrorKind};
///
/// let values = [1, 2, 3];
/// assert_eq!(get_element_at(&values, 1), Ok(&2));
/// assert_eq!(
///     get_element_at(&values, 3).unwrap_err().kind(),
///     ErrorKind::IndexOutOfRange
/// );
/// ```
pub fn get_element_at<T>(sequence: &[T], index: isize) -> Result<&T> {
    let position = checked_index(index, sequence.len()).map_err(rejected("get_element_at"))?;
    Ok(&sequence[position])
}

/// Sum the elements from position 0 through `index` inclusive
///
/// Checks run in order: an absent sequence signals `NullInput`, then an index
/// outside `[0, len)` signals `IndexOutOfRange`, then a running total that
/// leaves the range of `T` signals `ArithmeticOverflow`.
pub fn sum_sequence_up_to<T: CheckedInteger>(sequence: Option<&[T]>, index: isize) -> Result<T> {
    let sum = prefix_sum(sequence, index).map_err(rejected("sum_sequence_up_to"))?;
    log::trace!("sum_sequence_up_to(.., {index}) -> {sum}");
    Ok(sum)
}

fn prefix_sum<T: CheckedInteger>(sequence: Option<&[T]>, index: isize) -> Result<T> {
    let sequence = sequence.ok_or(OpError::NullInput { name: "sequence" })?;
    let last = checked_index(index, sequence.len())?;

    sequence[..=last].iter().try_fold(T::ZERO, |total, &value| {
        total.checked_add(value).ok_or(OpError::ArithmeticOverflow {
            operation: "summation",
            target: T::TYPE_NAME,
        })
    })
}

/// Convert a signed index into a position inside `[0, len)`
pub(crate) fn checked_index(index: isize, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < len)
        .ok_or(OpError::IndexOutOfRange { index, len })
}
