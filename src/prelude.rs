//! Shop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{Cart, CartError, CartLineItem},
    customers::{CustomerId, CustomerIdError},
    pricing::{PricingError, line_total, total_price},
    products::{Product, ProductId, ProductIdError},
};
