//! Key-value storage backends.
//!
//! The history store only needs to read and write one opaque byte entry,
//! so storage is a small trait with an in-memory implementation for tests
//! and a file-backed one for the binary.

use std::path::PathBuf;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur in a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped onto the backend
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),

    /// The storage root is unusable
    #[error("Storage directory unavailable: {}", .0.display())]
    Unavailable(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Byte-oriented key-value store.
///
/// Implementations must treat a missing key as `Ok(None)` on read and as a
/// successful no-op on removal.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Delete the value stored under `key`.
    fn remove(&mut self, key: &str) -> Result<()>;
}
