//! Get Cart

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;

use shop::{carts::Cart, customers::CustomerId};

use crate::domain::carts::{errors::CartsServiceError, repository::CartRepository};

/// Loads carts, falling back to an empty one.
#[derive(Clone)]
pub struct GetCartService {
    carts: Arc<dyn CartRepository>,
}

impl fmt::Debug for GetCartService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetCartService").finish_non_exhaustive()
    }
}

impl GetCartService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }
}

#[async_trait]
impl GetCartUseCase for GetCartService {
    async fn get_cart(&self, customer: CustomerId) -> Result<Cart, CartsServiceError> {
        let cart = self
            .carts
            .find_by_customer_id(customer)
            .await?
            .unwrap_or_else(|| Cart::new(customer));

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    /// Returns the customer's cart, or a new empty cart if none was saved.
    /// The empty cart is not persisted.
    async fn get_cart(&self, customer: CustomerId) -> Result<Cart, CartsServiceError>;
}
