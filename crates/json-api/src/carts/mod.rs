//! Carts

mod errors;
mod handlers;
pub(crate) mod line_items;
mod models;

pub(crate) use handlers::*;
