//! Carts

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    customers::CustomerId,
    pricing::{PricingError, total_price},
    products::Product,
};

pub mod line_items;

pub use line_items::CartLineItem;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested cumulative quantity is more than the product has in stock.
    #[error("only {items_in_stock} items in stock")]
    StockExceeded {
        /// Units available when the addition was attempted.
        items_in_stock: u32,
    },
}

/// Cart
///
/// The shopping cart of one customer. Holds at most one line item per
/// product, in the order products were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CustomerId,
    line_items: SmallVec<[CartLineItem; 4]>,
}

impl Cart {
    /// Creates an empty cart for the given customer.
    #[must_use]
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            line_items: SmallVec::new(),
        }
    }

    /// The owning customer's ID.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Adds `quantity` units of `product` to the cart.
    ///
    /// The cumulative quantity is checked against the stock level of the
    /// `product` passed in, which may be newer than the one held by an
    /// existing line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] if the resulting quantity would be
    /// more than `product.items_in_stock()`. The cart is not modified.
    pub fn add_product(&mut self, product: Product, quantity: NonZeroU32) -> Result<(), CartError> {
        let existing = self
            .line_items
            .iter_mut()
            .find(|item| item.product().id() == product.id());

        match existing {
            Some(item) => item.increase_quantity_by(quantity, product.items_in_stock()),
            None => {
                self.line_items.push(CartLineItem::new(product, quantity)?);

                Ok(())
            }
        }
    }

    /// A copy of the line items, in insertion order.
    pub fn line_items(&self) -> Vec<CartLineItem> {
        self.line_items.to_vec()
    }

    /// Total number of units over all line items.
    pub fn number_of_items(&self) -> u64 {
        self.line_items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of all line item sub-totals.
    ///
    /// Returns `Ok(None)` for an empty cart rather than a zero amount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows or line items are
    /// priced in different currencies.
    pub fn sub_total(&self) -> Result<Option<Money<'static, Currency>>, PricingError> {
        let line_totals = self
            .line_items
            .iter()
            .map(CartLineItem::sub_total)
            .collect::<Result<SmallVec<[_; 4]>, _>>()?;

        total_price(line_totals)
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
