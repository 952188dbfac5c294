//! App Context

use std::{fmt, sync::Arc};

use crate::domain::{
    carts::{
        AddToCartService, AddToCartUseCase, CartRepository, EmptyCartService, EmptyCartUseCase,
        GetCartService, GetCartUseCase, InMemoryCartRepository,
    },
    products::{
        FindProductsService, FindProductsUseCase, InMemoryProductRepository, ProductRepository,
    },
};

/// The use cases exposed to incoming adapters.
#[derive(Clone)]
pub struct AppContext {
    /// Product search.
    pub find_products: Arc<dyn FindProductsUseCase>,
    /// Adding products to carts.
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    /// Cart lookup.
    pub get_cart: Arc<dyn GetCartUseCase>,
    /// Cart deletion.
    pub empty_cart: Arc<dyn EmptyCartUseCase>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire every use case against the given repositories.
    #[must_use]
    pub fn from_repositories(
        products: Arc<dyn ProductRepository>,
        carts: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            find_products: Arc::new(FindProductsService::new(Arc::clone(&products))),
            add_to_cart: Arc::new(AddToCartService::new(Arc::clone(&carts), products)),
            get_cart: Arc::new(GetCartService::new(Arc::clone(&carts))),
            empty_cart: Arc::new(EmptyCartService::new(carts)),
        }
    }

    /// Build application context backed by in-memory repositories, optionally
    /// seeded with the demo catalogue.
    #[must_use]
    pub fn in_memory(demo_products: bool) -> Self {
        let products = if demo_products {
            InMemoryProductRepository::with_demo_products()
        } else {
            InMemoryProductRepository::new()
        };

        Self::from_repositories(Arc::new(products), Arc::new(InMemoryCartRepository::new()))
    }
}
