//! Carts Repository

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use shop::{carts::Cart, customers::CustomerId};

use crate::storage::StorageError;

/// Outgoing persistence port for carts.
#[automock]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stores a cart, replacing the customer's previous cart.
    async fn save(&self, cart: Cart) -> Result<(), StorageError>;

    /// Looks up the cart of a customer.
    async fn find_by_customer_id(&self, customer: CustomerId)
    -> Result<Option<Cart>, StorageError>;

    /// Deletes the cart of a customer. Deleting a missing cart is not an error.
    async fn delete_by_customer_id(&self, customer: CustomerId) -> Result<(), StorageError>;
}

/// Keeps carts in memory, keyed by customer.
///
/// Each call is atomic on its own. A find followed by a save is not, so two
/// concurrent additions to the same cart can overwrite each other.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<FxHashMap<CustomerId, Cart>>,
}

impl InMemoryCartRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn save(&self, cart: Cart) -> Result<(), StorageError> {
        debug!(customer_id = %cart.id(), items = cart.number_of_items(), "saving cart");

        self.carts.write().await.insert(cart.id(), cart);

        Ok(())
    }

    async fn find_by_customer_id(
        &self,
        customer: CustomerId,
    ) -> Result<Option<Cart>, StorageError> {
        Ok(self.carts.read().await.get(&customer).cloned())
    }

    async fn delete_by_customer_id(&self, customer: CustomerId) -> Result<(), StorageError> {
        if self.carts.write().await.remove(&customer).is_some() {
            debug!(customer_id = %customer, "deleted cart");
        }

        Ok(())
    }
}
