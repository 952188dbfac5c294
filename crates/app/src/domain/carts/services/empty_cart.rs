//! Empty Cart

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use shop::customers::CustomerId;

use crate::domain::carts::{errors::CartsServiceError, repository::CartRepository};

/// Empties carts by deleting them.
#[derive(Clone)]
pub struct EmptyCartService {
    carts: Arc<dyn CartRepository>,
}

impl fmt::Debug for EmptyCartService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyCartService").finish_non_exhaustive()
    }
}

impl EmptyCartService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }
}

#[async_trait]
impl EmptyCartUseCase for EmptyCartService {
    async fn empty_cart(&self, customer: CustomerId) -> Result<(), CartsServiceError> {
        self.carts.delete_by_customer_id(customer).await?;

        info!(customer_id = %customer, "emptied cart");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait EmptyCartUseCase: Send + Sync {
    /// Deletes the customer's cart. Emptying a missing cart succeeds.
    async fn empty_cart(&self, customer: CustomerId) -> Result<(), CartsServiceError>;
}
