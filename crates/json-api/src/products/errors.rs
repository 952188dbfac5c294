//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use shop_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::InvalidArgument(_) => {
            StatusError::bad_request().brief("Invalid 'query'")
        }
        ProductsServiceError::Storage(source) => {
            error!("failed to find products: {source}");

            StatusError::internal_server_error()
        }
    }
}
