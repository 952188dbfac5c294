//! Product Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shop::products::Product;

use crate::{extensions::*, money::MoneyResponse, products::errors::into_status_error};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product ID
    pub id: String,

    /// The product name
    pub name: String,

    /// The unit price
    pub price: MoneyResponse,

    /// Units available
    pub items_in_stock: u32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price().into(),
            items_in_stock: product.items_in_stock(),
        }
    }
}

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The matching products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the products whose name or description contains the query,
/// ignoring case.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid query"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    query: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let query = query
        .into_inner()
        .ok_or_else(|| StatusError::bad_request().brief("Missing 'query'"))?;

    let products = app
        .find_products
        .find_by_name_or_description(&query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.iter().map(ProductResponse::from).collect(),
    }))
}
