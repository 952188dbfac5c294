//! Products

pub mod demo;
pub mod errors;
pub mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use repository::*;
pub use service::*;
