//! Get Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response, parse_customer_id},
    },
    extensions::*,
};

/// Get Cart Handler
///
/// Returns the customer's cart. A customer without a cart gets an empty one.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "The cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer ID"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let customer = parse_customer_id(&customer_id.into_inner())?;

    let cart = app
        .get_cart
        .get_cart(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart_response(&cart)?))
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroU32, sync::Arc};

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop::{
        carts::Cart,
        customers::CustomerId,
        fixtures::{euros, test_product},
    };
    use shop_app::{
        context::AppContext,
        domain::carts::{CartsServiceError, MockGetCartUseCase},
        storage::StorageError,
    };

    use crate::test_helpers::{service_with, strict_app};

    use super::*;

    fn make_service(get_cart: MockGetCartUseCase) -> Service {
        service_with(
            AppContext {
                get_cart: Arc::new(get_cart),
                ..strict_app()
            },
            Router::with_path("carts/{customer_id}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_the_cart() -> TestResult {
        let customer = CustomerId::new(61_157)?;

        let mut cart = Cart::new(customer);
        cart.add_product(
            test_product(euros(19, 99), 10),
            NonZeroU32::new(2).ok_or("zero")?,
        )?;

        let mut get_cart = MockGetCartUseCase::new();

        get_cart
            .expect_get_cart()
            .once()
            .withf(move |requested| *requested == customer)
            .return_once(move |_| Ok(cart));

        let response: CartResponse = TestClient::get("http://example.com/carts/61157")
            .send(&make_service(get_cart))
            .await
            .take_json()
            .await?;

        assert_eq!(response.customer_id, 61_157);
        assert_eq!(response.number_of_items, 2);
        assert_eq!(response.sub_total.map(|total| total.minor_units), Some(39_98));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart_has_null_sub_total() -> TestResult {
        let mut get_cart = MockGetCartUseCase::new();

        get_cart
            .expect_get_cart()
            .once()
            .returning(|customer| Ok(Cart::new(customer)));

        let mut res = TestClient::get("http://example.com/carts/7")
            .send(&make_service(get_cart))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["sub_total"], serde_json::Value::Null);
        assert_eq!(body["number_of_items"], 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_customer_id_returns_400() -> TestResult {
        for customer_id in ["0", "-1", "abc"] {
            let mut get_cart = MockGetCartUseCase::new();

            get_cart.expect_get_cart().never();

            let res = TestClient::get(format!("http://example.com/carts/{customer_id}"))
                .send(&make_service(get_cart))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "customer id {customer_id}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut get_cart = MockGetCartUseCase::new();

        get_cart.expect_get_cart().once().return_once(|_| {
            Err(CartsServiceError::Storage(StorageError::Unavailable(
                "down".to_string(),
            )))
        });

        let res = TestClient::get("http://example.com/carts/7")
            .send(&make_service(get_cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
