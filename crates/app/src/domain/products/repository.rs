//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::debug;

use shop::products::{Product, ProductId};

use crate::{domain::products::demo::demo_products, storage::StorageError};

/// Outgoing persistence port for products.
#[automock]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a product, replacing any product with the same ID.
    async fn save(&self, product: Product) -> Result<(), StorageError>;

    /// Looks up a product by ID.
    async fn find_by_id(&self, product: &ProductId) -> Result<Option<Product>, StorageError>;

    /// Returns products whose name or description contains `query`,
    /// ignoring case.
    async fn find_by_name_or_description(&self, query: &str)
    -> Result<Vec<Product>, StorageError>;
}

/// Keeps products in memory, in the order they were first saved.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the demo catalogue.
    #[must_use]
    pub fn with_demo_products() -> Self {
        Self {
            products: RwLock::new(demo_products()),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.products.write().await;

        debug!(product_id = %product.id(), "saving product");

        match products.iter_mut().find(|stored| stored.id() == product.id()) {
            Some(stored) => *stored = product,
            None => products.push(product),
        }

        Ok(())
    }

    async fn find_by_id(&self, product: &ProductId) -> Result<Option<Product>, StorageError> {
        let products = self.products.read().await;

        Ok(products.iter().find(|stored| stored.id() == product).cloned())
    }

    async fn find_by_name_or_description(
        &self,
        query: &str,
    ) -> Result<Vec<Product>, StorageError> {
        let products = self.products.read().await;

        Ok(products
            .iter()
            .filter(|product| product.matches(query))
            .cloned()
            .collect())
    }
}
