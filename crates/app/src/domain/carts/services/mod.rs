//! Cart use cases.

mod add_to_cart;
mod empty_cart;
mod get_cart;

pub use add_to_cart::*;
pub use empty_cart::*;
pub use get_cart::*;
