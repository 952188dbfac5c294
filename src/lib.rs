//! Shop
//!
//! Domain model of a small shop: customers, products and their shopping
//! carts. Carts accumulate quantities per product and never hold more units
//! of a product than it has in stock.

pub mod carts;
pub mod customers;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
