//! Storage errors shared by the repository ports.

use thiserror::Error;

/// A repository could not complete an operation.
///
/// The in-memory adapters never produce this; it exists for adapters backed
/// by external storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached or rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
