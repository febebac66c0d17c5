//! Authoritative in-memory ticket collection.
//!
//! The store enforces the data-model invariants (monotonic ids, immutable
//! `created_at`, append-only comments) and nothing else: field validation
//! is a form concern that happens before a draft ever reaches the store.

use chrono::Utc;
use tracing::debug;

use crate::model::{Comment, Priority, Status, Ticket, TicketId};

/// Caller-supplied fields for a new ticket.
///
/// `status`, `created_at`, `comments`, and the id are always assigned by the
/// store, regardless of what the caller wanted.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub customer_name: String,
    pub email: String,
    pub description: String,
    pub priority: Priority,
}

/// Partial update merged into an existing ticket in place.
///
/// `None` fields are left untouched. The id and `created_at` are not
/// patchable.
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TicketPatch {
    /// Patch that only moves the ticket to `status`.
    #[must_use]
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Caller-supplied fields for a new comment; `at` is stamped on append.
#[derive(Debug, Clone)]
pub struct CommentDraft {
    pub user: String,
    pub text: String,
}

/// Ordered ticket collection, most recent first.
///
/// Lookup misses on `update`/`add_comment`/`delete` are absorbed as no-ops
/// rather than surfaced as errors; each mutator reports whether the
/// collection actually changed so callers can decide when to snapshot.
#[derive(Debug, Default, Clone)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from a previously persisted collection, preserving order.
    #[must_use]
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Next id to assign: one past the running maximum, 1 when empty.
    /// Deleted ids are never handed out again.
    fn next_id(&self) -> TicketId {
        let max = self
            .tickets
            .iter()
            .map(|ticket| ticket.id.get())
            .max()
            .unwrap_or(0);
        TicketId::new(max + 1)
    }

    /// Create a ticket from `draft` and insert it at the front.
    ///
    /// New tickets always start `Open` with an empty comment list.
    pub fn create(&mut self, draft: TicketDraft) -> TicketId {
        let id = self.next_id();
        let ticket = Ticket {
            id,
            title: draft.title,
            customer_name: draft.customer_name,
            email: draft.email,
            description: draft.description,
            priority: draft.priority,
            status: Status::Open,
            created_at: Utc::now(),
            comments: Vec::new(),
        };

        debug!(id = %id, "ticket created");
        self.tickets.insert(0, ticket);
        id
    }

    /// Merge `patch` into the ticket with `id`. Returns whether a ticket
    /// was found (and therefore changed).
    pub fn update(&mut self, id: TicketId, patch: TicketPatch) -> bool {
        let Some(ticket) = self.tickets.iter_mut().find(|t| t.id == id) else {
            debug!(id = %id, "update ignored: no such ticket");
            return false;
        };

        if let Some(title) = patch.title {
            ticket.title = title;
        }
        if let Some(customer_name) = patch.customer_name {
            ticket.customer_name = customer_name;
        }
        if let Some(email) = patch.email {
            ticket.email = email;
        }
        if let Some(description) = patch.description {
            ticket.description = description;
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        if let Some(priority) = patch.priority {
            ticket.priority = priority;
        }

        debug!(id = %id, "ticket updated");
        true
    }

    /// Append a comment to the ticket with `id`, stamping it with the
    /// current time. Returns whether a ticket was found.
    pub fn add_comment(&mut self, id: TicketId, draft: CommentDraft) -> bool {
        let Some(ticket) = self.tickets.iter_mut().find(|t| t.id == id) else {
            debug!(id = %id, "comment ignored: no such ticket");
            return false;
        };

        ticket.comments.push(Comment {
            user: draft.user,
            text: draft.text,
            at: Utc::now(),
        });

        debug!(id = %id, comments = ticket.comments.len(), "comment added");
        true
    }

    /// Remove the ticket with `id` along with all of its comments.
    /// Returns whether a ticket was removed.
    pub fn delete(&mut self, id: TicketId) -> bool {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| ticket.id != id);
        let removed = self.tickets.len() != before;

        if removed {
            debug!(id = %id, "ticket deleted");
        } else {
            debug!(id = %id, "delete ignored: no such ticket");
        }
        removed
    }

    /// All tickets in collection order (most recent first).
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
