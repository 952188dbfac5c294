//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use shop_app::context::AppContext;

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The application context injected with the server [`State`].
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(type_name = std::any::type_name::<T>(), "missing depot value");

            StatusError::internal_server_error()
        })
    }

    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain_or_500::<Arc<State>>().map(|state| &state.app)
    }
}
