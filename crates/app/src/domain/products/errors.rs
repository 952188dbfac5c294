//! Products service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
