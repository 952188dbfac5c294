//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rand::seq::SliceRandom;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Characters used for generated product IDs. Omits look-alikes (0/O, 1/I).
const PRODUCT_ID_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Length of generated product IDs.
const PRODUCT_ID_LENGTH: usize = 8;

/// Errors raised while constructing a [`ProductId`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductIdError {
    /// The value was empty or whitespace only.
    #[error("product id must not be empty")]
    Empty,
}

/// Product ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product ID from a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns [`ProductIdError::Empty`] if `value` is empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, ProductIdError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(ProductIdError::Empty);
        }

        Ok(Self(value))
    }

    /// Generates a random eight character product ID.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        let value = (0..PRODUCT_ID_LENGTH)
            .filter_map(|_| PRODUCT_ID_ALPHABET.choose(&mut rng).copied())
            .map(char::from)
            .collect();

        Self(value)
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Product
///
/// Products are owned by the product repository; carts hold copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money<'static, Currency>,
    items_in_stock: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money<'static, Currency>,
        items_in_stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            items_in_stock,
        }
    }

    /// Product ID
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Number of units available, the ceiling for any single cart.
    pub fn items_in_stock(&self) -> u32 {
        self.items_in_stock
    }

    /// Whether `query` occurs in the name or description, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
