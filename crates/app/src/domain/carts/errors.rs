//! Carts service errors.

use thiserror::Error;

use shop::carts::CartError;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("product not found")]
    ProductNotFound,

    #[error("only {0} items in stock")]
    StockExceeded(u32),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

impl From<CartError> for CartsServiceError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::StockExceeded { items_in_stock } => Self::StockExceeded(items_in_stock),
        }
    }
}
