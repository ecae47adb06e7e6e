//! Fixed-width integer capability shared by the integer operations

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer with a bounded range `[MIN, MAX]`
///
/// Implemented for every signed and unsigned primitive integer. Arithmetic
/// goes through the checked primitives so results outside the range are
/// reported instead of wrapped.
pub trait CheckedInteger:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + sealed::Sealed
    + 'static
{
    /// Additive identity
    const ZERO: Self;
    /// Smallest representable value
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// Type name used in error messages
    const TYPE_NAME: &'static str;

    /// Add, returning `None` outside `[MIN, MAX]`
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Divide, returning `None` for a zero divisor or an unrepresentable quotient
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl CheckedInteger for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_div(self, rhs)
                }
            }
        )*
    };
}

impl_checked_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
