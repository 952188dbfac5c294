//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use shop::products::Product;

use crate::domain::products::{errors::ProductsServiceError, repository::ProductRepository};

/// Shortest accepted search query, in characters.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Finds products through the product repository.
#[derive(Clone)]
pub struct FindProductsService {
    repository: Arc<dyn ProductRepository>,
}

impl fmt::Debug for FindProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindProductsService").finish_non_exhaustive()
    }
}

impl FindProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FindProductsUseCase for FindProductsService {
    async fn find_by_name_or_description(
        &self,
        query: &str,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        if query.chars().count() < MIN_QUERY_LENGTH {
            return Err(ProductsServiceError::InvalidArgument(
                "'query' must be at least two characters long",
            ));
        }

        let products = self.repository.find_by_name_or_description(query).await?;

        debug!(query, matches = products.len(), "searched products");

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait FindProductsUseCase: Send + Sync {
    /// Finds products whose name or description contains `query`, ignoring
    /// case. The query must be at least two characters long.
    async fn find_by_name_or_description(
        &self,
        query: &str,
    ) -> Result<Vec<Product>, ProductsServiceError>;
}
