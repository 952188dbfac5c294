//! Shop application layer: use cases, repository ports and in-memory adapters.

pub mod context;
pub mod domain;
pub mod storage;
