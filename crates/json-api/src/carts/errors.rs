//! Errors

use salvo::http::StatusError;
use tracing::error;

use shop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        // Quantity is the only argument the cart use cases validate.
        CartsServiceError::InvalidArgument(_) => {
            StatusError::bad_request().brief("Invalid 'quantity'")
        }
        CartsServiceError::ProductNotFound => {
            StatusError::bad_request().brief("The requested product does not exist")
        }
        CartsServiceError::StockExceeded(items_in_stock) => {
            StatusError::bad_request().brief(format!("Only {items_in_stock} items in stock"))
        }
        CartsServiceError::Storage(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use shop_app::storage::StorageError;

    use super::*;

    #[test]
    fn stock_exceeded_names_the_stock_level() {
        let error = into_status_error(CartsServiceError::StockExceeded(3));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Only 3 items in stock");
    }

    #[test]
    fn unknown_product_is_a_bad_request() {
        let error = into_status_error(CartsServiceError::ProductNotFound);

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "The requested product does not exist");
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let error = into_status_error(CartsServiceError::Storage(StorageError::Unavailable(
            "down".to_string(),
        )));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
