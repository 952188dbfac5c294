//! Create Cart Line Item Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shop::products::ProductId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response, parse_customer_id},
    },
    extensions::*,
};

/// Add Line Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddLineItemRequest {
    /// The product to add
    pub product_id: String,

    /// Units to add; must be greater than zero
    pub quantity: u32,
}

/// Create Cart Line Item Handler
///
/// Adds units of a product to the customer's cart, creating the cart if
/// needed, and returns the updated cart.
#[endpoint(
    tags("carts"),
    summary = "Add Product to Cart",
    responses(
        (status_code = StatusCode::OK, description = "The updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid input, unknown product or not enough stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.line_items.create",
    skip(customer_id, json, depot),
    fields(
        customer_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<String>,
    json: JsonBody<AddLineItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let customer = parse_customer_id(&customer_id.into_inner())?;

    let AddLineItemRequest {
        product_id,
        quantity,
    } = json.into_inner();

    let product = ProductId::new(product_id).or_400("Invalid 'productId'")?;

    let span = tracing::Span::current();

    span.record("customer_id", customer.value());
    span.record("product_id", tracing::field::display(&product));

    let cart = app
        .add_to_cart
        .add_to_cart(customer, product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart_response(&cart)?))
}
