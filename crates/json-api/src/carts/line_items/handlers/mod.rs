//! Cart Line Item Handlers

pub(crate) mod create;
