//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while pricing line items.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Quantity times unit price does not fit in minor units.
    #[error("line total overflows the minor unit range")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `quantity` units at `price`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the total does not fit in minor units.
pub fn line_total<'a>(
    price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor_units = price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor_units, price.currency()))
}

/// Sums a sequence of prices.
///
/// Returns `None` for an empty sequence: there is no currency to express a
/// zero amount in.
///
/// # Errors
///
/// Returns [`PricingError::Money`] if the prices are in different currencies.
pub fn total_price<'a>(
    prices: impl IntoIterator<Item = Money<'a, Currency>>,
) -> Result<Option<Money<'a, Currency>>, PricingError> {
    let mut prices = prices.into_iter();

    let Some(first) = prices.next() else {
        return Ok(None);
    };

    let total = prices.try_fold(first, |acc, price| acc.add(price))?;

    Ok(Some(total))
}
