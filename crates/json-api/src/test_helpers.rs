//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shop_app::{
    context::AppContext,
    domain::{
        carts::{MockAddToCartUseCase, MockEmptyCartUseCase, MockGetCartUseCase},
        products::MockFindProductsUseCase,
    },
};

use crate::state::State;

fn strict_find_products_mock() -> MockFindProductsUseCase {
    let mut find_products = MockFindProductsUseCase::new();

    find_products.expect_find_by_name_or_description().never();

    find_products
}

fn strict_add_to_cart_mock() -> MockAddToCartUseCase {
    let mut add_to_cart = MockAddToCartUseCase::new();

    add_to_cart.expect_add_to_cart().never();

    add_to_cart
}

fn strict_get_cart_mock() -> MockGetCartUseCase {
    let mut get_cart = MockGetCartUseCase::new();

    get_cart.expect_get_cart().never();

    get_cart
}

fn strict_empty_cart_mock() -> MockEmptyCartUseCase {
    let mut empty_cart = MockEmptyCartUseCase::new();

    empty_cart.expect_empty_cart().never();

    empty_cart
}

/// An app context whose use cases must not be called.
pub(crate) fn strict_app() -> AppContext {
    AppContext {
        find_products: Arc::new(strict_find_products_mock()),
        add_to_cart: Arc::new(strict_add_to_cart_mock()),
        get_cart: Arc::new(strict_get_cart_mock()),
        empty_cart: Arc::new(strict_empty_cart_mock()),
    }
}

pub(crate) fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}
