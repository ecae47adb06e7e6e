//! Price calculations in exact decimal arithmetic

use crate::error::{rejected, OpError, Result};
use rust_decimal::Decimal;

/// Apply a percentage discount to `price`
///
/// The discount must lie in `0..=100` and is checked before the price, which
/// must not be negative. Both violations signal
/// [`InvalidArgument`](crate::ErrorKind::InvalidArgument).
///
/// # Examples
///
/// ```
/// use checkops_core::{calculate_discount, Decimal, ErrorKind};
///
/// let price = Decimal::from(100);
/// assert_eq!(calculate_discount(price, Decimal::from(10)), Ok(Decimal::from(90)));
///
/// let err = calculate_discount(price, Decimal::from(110)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn calculate_discount(price: Decimal, discount: Decimal) -> Result<Decimal> {
    let discounted = discounted_price(price, discount).map_err(rejected("calculate_discount"))?;
    log::trace!("calculate_discount({price}, {discount}) -> {discounted}");
    Ok(discounted)
}

fn discounted_price(price: Decimal, discount: Decimal) -> Result<Decimal> {
    if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
        return Err(OpError::InvalidArgument {
            name: "discount",
            reason: format!("{discount} is outside 0..=100"),
        });
    }
    if price < Decimal::ZERO {
        return Err(OpError::InvalidArgument {
            name: "price",
            reason: format!("{price} is negative"),
        });
    }

    let remaining = (Decimal::ONE_HUNDRED - discount) / Decimal::ONE_HUNDRED;
    price
        .checked_mul(remaining)
        .ok_or(OpError::ArithmeticOverflow {
            operation: "discounting",
            target: "Decimal",
        })
}
