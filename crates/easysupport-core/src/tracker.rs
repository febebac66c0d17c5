//! The tracker ties the ticket store to snapshot persistence.
//!
//! Every mutation that changes the collection triggers a best-effort
//! snapshot write. Failures are logged and swallowed: the in-memory
//! collection stays authoritative and the next successful write catches up.

use tracing::warn;

use easysupport_kv::KeyValueStore;

use crate::model::{Ticket, TicketId};
use crate::persist::{SnapshotError, SnapshotPersister};
use crate::store::{CommentDraft, TicketDraft, TicketPatch, TicketStore};

/// Ticket store plus fire-and-forget snapshot persistence.
#[derive(Debug)]
pub struct Tracker<S> {
    store: TicketStore,
    persister: SnapshotPersister<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Open a tracker over `kv`, rehydrating from the snapshot under `key`.
    /// A missing snapshot starts an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing snapshot cannot be read or decoded.
    pub fn open(kv: S, key: impl Into<String>) -> Result<Self, SnapshotError> {
        let persister = SnapshotPersister::new(kv, key);
        let store = match persister.load()? {
            Some(tickets) => TicketStore::from_tickets(tickets),
            None => TicketStore::new(),
        };
        Ok(Self { store, persister })
    }

    pub fn create(&mut self, draft: TicketDraft) -> TicketId {
        let id = self.store.create(draft);
        self.snapshot();
        id
    }

    pub fn update(&mut self, id: TicketId, patch: TicketPatch) -> bool {
        let changed = self.store.update(id, patch);
        if changed {
            self.snapshot();
        }
        changed
    }

    pub fn add_comment(&mut self, id: TicketId, draft: CommentDraft) -> bool {
        let changed = self.store.add_comment(id, draft);
        if changed {
            self.snapshot();
        }
        changed
    }

    pub fn delete(&mut self, id: TicketId) -> bool {
        let changed = self.store.delete(id);
        if changed {
            self.snapshot();
        }
        changed
    }

    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        self.store.tickets()
    }

    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.store.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // Fire-and-forget: nothing upstream waits on or verifies the write.
    fn snapshot(&mut self) {
        if let Err(err) = self.persister.save(self.store.tickets()) {
            warn!(key = self.persister.key(), error = %err, "snapshot write failed");
        }
    }
}
