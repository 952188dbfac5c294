//! Fixtures
//!
//! Builders for prices and products used by tests and demo data.

use rusty_money::{Money, iso};

use crate::products::{Product, ProductId};

/// A euro amount from major and minor units, e.g. `euros(19, 99)` is €19.99.
pub fn euros(major: i64, minor: i64) -> Money<'static, iso::Currency> {
    Money::from_minor(major * 100 + minor, iso::EUR)
}

/// A product with a random ID, placeholder name and description, and the
/// given price and stock level.
pub fn test_product(price: Money<'static, iso::Currency>, items_in_stock: u32) -> Product {
    Product::new(
        ProductId::random(),
        "any name",
        "any description",
        price,
        items_in_stock,
    )
}
