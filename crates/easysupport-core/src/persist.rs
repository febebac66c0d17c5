//! Whole-state snapshot persistence over a key-value byte store.
//!
//! The entire ticket collection is serialized as one JSON document under a
//! single namespaced key. Read once at startup to rehydrate; written after
//! every mutation by the tracker.

use thiserror::Error;

use easysupport_kv::{KeyValueStore, KvError};

use crate::model::Ticket;

/// Namespaced key the whole-state snapshot lives under.
pub const DEFAULT_STORAGE_KEY: &str = "easysupport";

/// Errors from snapshot save/load.
///
/// Runtime saves are fire-and-forget (the tracker logs and moves on), but
/// startup rehydration is allowed to care about a corrupt payload.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("key-value store rejected the snapshot")]
    Store(#[from] KvError),
    #[error("snapshot could not be encoded")]
    Encode(#[source] serde_json::Error),
    #[error("stored snapshot is not a valid ticket collection")]
    Decode(#[source] serde_json::Error),
}

/// Serializes the ticket collection to and from one key in a byte store.
#[derive(Debug)]
pub struct SnapshotPersister<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotPersister<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying byte store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the full collection, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the byte store rejects the
    /// write.
    pub fn save(&mut self, tickets: &[Ticket]) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec(tickets).map_err(SnapshotError::Encode)?;
        self.store.set(&self.key, &bytes)?;
        Ok(())
    }

    /// Read the persisted collection. `Ok(None)` means no snapshot exists
    /// yet, which callers treat as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte store fails or the payload does not
    /// decode as a ticket collection.
    pub fn load(&self) -> Result<Option<Vec<Ticket>>, SnapshotError> {
        let Some(bytes) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let tickets = serde_json::from_slice(&bytes).map_err(SnapshotError::Decode)?;
        Ok(Some(tickets))
    }
}
