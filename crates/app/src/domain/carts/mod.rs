//! Carts

pub mod errors;
pub mod repository;
pub mod services;

pub use errors::CartsServiceError;
pub use repository::*;
pub use services::*;
