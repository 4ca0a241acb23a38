//! History store error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur while persisting history
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The storage backend rejected the read or write
    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The entry could not be read when the store was opened, so it is
    /// never overwritten
    #[error("History entry '{0}' could not be read; refusing to overwrite it")]
    Unreadable(String),
}
