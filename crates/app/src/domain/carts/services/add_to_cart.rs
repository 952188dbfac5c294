//! Add To Cart

use std::{fmt, num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use shop::{carts::Cart, customers::CustomerId, products::ProductId};

use crate::domain::{
    carts::{errors::CartsServiceError, repository::CartRepository},
    products::ProductRepository,
};

/// Adds products to carts, creating the cart on first use.
#[derive(Clone)]
pub struct AddToCartService {
    carts: Arc<dyn CartRepository>,
    products: Arc<dyn ProductRepository>,
}

impl fmt::Debug for AddToCartService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddToCartService").finish_non_exhaustive()
    }
}

impl AddToCartService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { carts, products }
    }
}

#[async_trait]
impl AddToCartUseCase for AddToCartService {
    async fn add_to_cart(
        &self,
        customer: CustomerId,
        product: ProductId,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let quantity = NonZeroU32::new(quantity).ok_or(CartsServiceError::InvalidArgument(
            "'quantity' must be greater than 0",
        ))?;

        let product = self
            .products
            .find_by_id(&product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self
            .carts
            .find_by_customer_id(customer)
            .await?
            .unwrap_or_else(|| Cart::new(customer));

        let product_id = product.id().clone();

        cart.add_product(product, quantity)?;

        self.carts.save(cart.clone()).await?;

        info!(
            customer_id = %customer,
            product_id = %product_id,
            quantity = quantity.get(),
            "added product to cart"
        );

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    /// Adds `quantity` units of a product to the customer's cart and returns
    /// the updated cart.
    async fn add_to_cart(
        &self,
        customer: CustomerId,
        product: ProductId,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;
}
