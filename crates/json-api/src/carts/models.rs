//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shop::{
    carts::{Cart, CartLineItem},
    customers::CustomerId,
    pricing::PricingError,
};

use crate::{extensions::*, money::MoneyResponse};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The customer owning the cart
    pub customer_id: i32,

    /// The line items, in the order their products were first added
    pub line_items: Vec<LineItemResponse>,

    /// Total units across all line items
    pub number_of_items: u64,

    /// Sum of the line item totals; absent for an empty cart
    pub sub_total: Option<MoneyResponse>,
}

impl TryFrom<&Cart> for CartResponse {
    type Error = PricingError;

    fn try_from(cart: &Cart) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: cart.id().value(),
            line_items: cart.line_items().iter().map(LineItemResponse::from).collect(),
            number_of_items: cart.number_of_items(),
            sub_total: cart.sub_total()?.as_ref().map(MoneyResponse::from),
        })
    }
}

/// Cart Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// The product ID
    pub product_id: String,

    /// The product name
    pub product_name: String,

    /// The unit price
    pub price: MoneyResponse,

    /// Units of the product in the cart
    pub quantity: u32,
}

impl From<&CartLineItem> for LineItemResponse {
    fn from(line_item: &CartLineItem) -> Self {
        let product = line_item.product();

        Self {
            product_id: product.id().to_string(),
            product_name: product.name().to_string(),
            price: product.price().into(),
            quantity: line_item.quantity(),
        }
    }
}

/// Parse a customer ID path segment.
pub(crate) fn parse_customer_id(raw: &str) -> Result<CustomerId, salvo::http::StatusError> {
    raw.parse::<CustomerId>().or_400("Invalid 'customerId'")
}

/// Render a cart, failing with a 500 if its prices cannot be summed.
pub(crate) fn cart_response(cart: &Cart) -> Result<CartResponse, salvo::http::StatusError> {
    CartResponse::try_from(cart).or_500("failed to price cart")
}
