//! Cart Line Items

mod handlers;

pub(crate) use handlers::*;
