//! Cart Line Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    carts::CartError,
    pricing::{PricingError, line_total},
    products::Product,
};

/// A product and the quantity of it held in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    product: Product,
    quantity: u32,
}

impl CartLineItem {
    /// Creates a line item, checking `quantity` against the product's stock.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] if `quantity` is more than the
    /// product has in stock.
    pub(crate) fn new(product: Product, quantity: NonZeroU32) -> Result<Self, CartError> {
        let items_in_stock = product.items_in_stock();

        if quantity.get() > items_in_stock {
            return Err(CartError::StockExceeded { items_in_stock });
        }

        Ok(Self {
            product,
            quantity: quantity.get(),
        })
    }

    /// Adds `delta` to the quantity unless the total would exceed `stock_limit`.
    ///
    /// The quantity is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] carrying `stock_limit`.
    pub(crate) fn increase_quantity_by(
        &mut self,
        delta: NonZeroU32,
        stock_limit: u32,
    ) -> Result<(), CartError> {
        let quantity = self
            .quantity
            .checked_add(delta.get())
            .filter(|quantity| *quantity <= stock_limit)
            .ok_or(CartError::StockExceeded {
                items_in_stock: stock_limit,
            })?;

        self.quantity = quantity;

        Ok(())
    }

    /// The product this line item refers to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity times unit price.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit in minor units.
    pub fn sub_total(&self) -> Result<Money<'static, Currency>, PricingError> {
        line_total(self.product.price(), self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures::{euros, test_product};

    use super::*;

    fn qty(value: u32) -> TestResult<NonZeroU32> {
        Ok(NonZeroU32::new(value).ok_or("quantity must be non-zero")?)
    }

    #[test]
    fn new_rejects_quantity_above_stock() -> TestResult {
        let product = test_product(euros(19, 99), 3);

        let result = CartLineItem::new(product, qty(4)?);

        assert_eq!(result, Err(CartError::StockExceeded { items_in_stock: 3 }));

        Ok(())
    }

    #[test]
    fn increase_quantity_up_to_the_limit() -> TestResult {
        let mut item = CartLineItem::new(test_product(euros(19, 99), 10), qty(4)?)?;

        item.increase_quantity_by(qty(6)?, 10)?;

        assert_eq!(item.quantity(), 10);

        Ok(())
    }

    #[test]
    fn increase_quantity_past_the_limit_leaves_quantity_unchanged() -> TestResult {
        let mut item = CartLineItem::new(test_product(euros(19, 99), 10), qty(4)?)?;

        let result = item.increase_quantity_by(qty(7)?, 10);

        assert_eq!(result, Err(CartError::StockExceeded { items_in_stock: 10 }));
        assert_eq!(item.quantity(), 4);

        Ok(())
    }

    #[test]
    fn increase_quantity_overflow_is_reported_as_stock_exceeded() -> TestResult {
        let mut item = CartLineItem::new(test_product(euros(1, 0), u32::MAX), qty(u32::MAX)?)?;

        let result = item.increase_quantity_by(qty(1)?, u32::MAX);

        assert_eq!(
            result,
            Err(CartError::StockExceeded {
                items_in_stock: u32::MAX
            })
        );
        assert_eq!(item.quantity(), u32::MAX);

        Ok(())
    }

    #[test]
    fn sub_total_is_quantity_times_price() -> TestResult {
        let item = CartLineItem::new(test_product(euros(25, 99), 5), qty(3)?)?;

        assert_eq!(item.sub_total()?, euros(77, 97));

        Ok(())
    }
}
