//! Delete Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, models::parse_customer_id},
    extensions::*,
};

/// Delete Cart Handler
///
/// Empties the customer's cart. Emptying a missing cart succeeds.
#[endpoint(
    tags("carts"),
    summary = "Empty Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart emptied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer ID"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(customer_id, depot),
    fields(customer_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    customer_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let customer = parse_customer_id(&customer_id.into_inner())?;

    tracing::Span::current().record("customer_id", customer.value());

    app.empty_cart
        .empty_cart(customer)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
