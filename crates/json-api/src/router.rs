//! App Router

use salvo::Router;

use crate::{carts, healthcheck, products};

/// Routes for every endpoint, without middleware or state.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("carts/{customer_id}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(Router::with_path("line-items").post(carts::line_items::create::handler)),
        )
}
