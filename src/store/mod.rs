//! Persistence for the calculation history.
//!
//! [`HistoryStore`] is the imperative shell around the pure
//! [`History`](crate::core::History) value: it loads the list from a
//! [`KeyValueStore`] once, and writes the whole list back after every
//! change.
//!
//! If the entry exists but cannot be read, the store runs in memory only
//! and never writes over it.

use crate::core::{Computation, History, HistoryItem};
use crate::storage::KeyValueStore;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod codec;
pub mod error;

pub use codec::HistoryEncoding;
pub use error::StoreError;

/// Storage key used when none is configured.
pub const DEFAULT_HISTORY_KEY: &str = "calc.history.v1";

/// History list bound to a storage entry.
///
/// # Example
///
/// ```rust
/// use tally::core::Computation;
/// use tally::storage::MemoryStore;
/// use tally::store::{HistoryEncoding, HistoryStore, DEFAULT_HISTORY_KEY};
///
/// let mut store = HistoryStore::open(MemoryStore::new(), DEFAULT_HISTORY_KEY, HistoryEncoding::Json);
/// store
///     .append(Computation { expression: "2 × 4".into(), result: "8".into() })
///     .unwrap();
///
/// let reopened = HistoryStore::open(store.into_storage(), DEFAULT_HISTORY_KEY, HistoryEncoding::Json);
/// assert_eq!(reopened.history().len(), 1);
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    key: String,
    encoding: HistoryEncoding,
    history: History,
    writable: bool,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load the history stored under `key`.
    ///
    /// A missing entry, an unreadable backend or undecodable data all
    /// produce an empty history; the latter two are logged. Undecodable
    /// data is replaced on the next save. A backend read failure leaves
    /// the store read-only, since the entry may still be intact.
    pub fn open(storage: S, key: impl Into<String>, encoding: HistoryEncoding) -> Self {
        let key = key.into();
        let mut writable = true;
        let history = match storage.get(&key) {
            Ok(Some(bytes)) => match encoding.decode(&bytes) {
                Ok(history) => history,
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding unreadable history");
                    History::new()
                }
            },
            Ok(None) => History::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "history storage unavailable, not saving this session");
                writable = false;
                History::new()
            }
        };
        debug!(key = %key, entries = history.len(), "loaded history");

        Self {
            storage,
            key,
            encoding,
            history,
            writable,
        }
    }

    /// Current history, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Record a finished computation at the front and persist.
    ///
    /// The in-memory history is updated even if the write fails.
    pub fn append(&mut self, computation: Computation) -> Result<HistoryItem, StoreError> {
        let item = HistoryItem::new(computation, Utc::now());
        self.history = self.history.record(item.clone());
        self.save()?;
        Ok(item)
    }

    /// Remove the entries at the given positions and persist.
    pub fn delete(&mut self, offsets: &[usize]) -> Result<(), StoreError> {
        self.history = self.history.remove_offsets(offsets);
        self.save()
    }

    /// Remove the entries with the given identifiers and persist.
    pub fn delete_ids(&mut self, ids: &[Uuid]) -> Result<(), StoreError> {
        self.history = self.history.remove_ids(ids);
        self.save()
    }

    /// Drop every entry and persist the empty list.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.history = History::new();
        self.save()
    }

    /// Write the current list to storage.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if !self.writable {
            return Err(StoreError::Unreadable(self.key.clone()));
        }
        let bytes = self.encoding.encode(&self.history)?;
        self.storage.set(&self.key, bytes)?;
        debug!(key = %self.key, entries = self.history.len(), "saved history");
        Ok(())
    }

    /// Give back the storage backend, dropping the in-memory list.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
