//! Validated utility operations with a precise error taxonomy
//!
//! Each operation checks its inputs against one or more preconditions and
//! either returns a result or an [`OpError`] whose [`ErrorKind`] says exactly
//! which precondition failed. Operations are pure: they never mutate their
//! inputs, hold no state between calls, and are safe to call from any thread.
//!
//! # Operations
//!
//! | Operation | Error kinds, in check order |
//! |---|---|
//! | [`reverse_text`] | `NullInput` |
//! | [`calculate_discount`] | `InvalidArgument` |
//! | [`get_element_at`] | `IndexOutOfRange` |
//! | [`perform_secure_operation`] | `InvalidOperation` |
//! | [`parse_integer`] | `FormatError`, `ArithmeticOverflow` |
//! | [`find_value_by_key`] | `KeyNotFound` |
//! | [`add_with_overflow_check`] | `ArithmeticOverflow` |
//! | [`divide_integers`] | `DivideByZero`, `ArithmeticOverflow` |
//! | [`sum_sequence_up_to`] | `NullInput`, `IndexOutOfRange`, `ArithmeticOverflow` |
//! | [`get_element_as_number`] | `KeyNotFound`, `FormatError`, `ArithmeticOverflow` |
//!
//! Rejections are logged through the [`log`] facade at `debug` level; install
//! any `log` backend to see them.
//!
//! # Example
//!
//! ```rust
//! use checkops_core::{sum_sequence_up_to, ErrorKind};
//!
//! let values = [1, 2, 3];
//! assert_eq!(sum_sequence_up_to(Some(&values[..]), 2), Ok(6));
//!
//! let err = sum_sequence_up_to::<i32>(None, 2).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NullInput);
//! ```

#![warn(missing_docs)]

pub mod access;
pub mod arith;
pub mod error;
pub mod integer;
pub mod lookup;
pub mod parse;
pub mod pricing;
#[cfg(feature = "serde")]
pub mod report;
pub mod sequence;
pub mod text;

// Re-export key types
pub use access::{perform_secure_operation, SECURE_OPERATION_CONFIRMATION};
pub use arith::{add_with_overflow_check, divide_integers};
pub use error::{ErrorKind, OpError, Result};
pub use integer::CheckedInteger;
pub use lookup::{find_value_by_key, get_element_as_number, Lookup};
pub use parse::parse_integer;
pub use pricing::calculate_discount;
#[cfg(feature = "serde")]
pub use report::ErrorReport;
pub use sequence::{get_element_at, sum_sequence_up_to};
pub use text::reverse_text;

// Re-export the decimal type used for prices
pub use rust_decimal::Decimal;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_error_types_are_thread_safe() {
        assert_send_sync::<OpError>();
        assert_send_sync::<ErrorKind>();
    }

    #[test]
    fn test_module_exports() {
        let _ = reverse_text(Some("ok"));
        let _ = calculate_discount(Decimal::ONE_HUNDRED, Decimal::TEN);
        let _ = get_element_at(&[1], 0);
        let _ = perform_secure_operation(true);
        let _ = parse_integer::<i64>("1");
        let _ = add_with_overflow_check(1u32, 1);
        let _ = divide_integers(4i16, 2);
        let _ = sum_sequence_up_to(Some(&[1u8][..]), 0);
    }
}
