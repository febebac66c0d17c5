//! easysupport-core: ticket store, query projection, and persistence.
//!
//! The authoritative state is an ordered in-memory ticket collection
//! ([`store::TicketStore`]); mutation happens only through its operation
//! set. [`tracker::Tracker`] adds fire-and-forget snapshot persistence over
//! a key-value byte store, [`query`] derives the filtered/sorted/paginated
//! projection for display, and [`validate`] keeps form checks out of the
//! store entirely.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums per concern; lookup misses in the
//!   store are no-ops, not errors.
//! - **Logging**: `tracing` macros; the library installs no subscriber.

pub mod config;
pub mod debounce;
pub mod model;
pub mod persist;
pub mod query;
pub mod search_params;
pub mod store;
pub mod tracker;
pub mod validate;

pub use config::TrackerConfig;
pub use debounce::Debouncer;
pub use model::{Comment, Priority, Status, Ticket, TicketId};
pub use persist::{DEFAULT_STORAGE_KEY, SnapshotError, SnapshotPersister};
pub use query::{ListView, Pager, Projection, SortMode, StatusFilter};
pub use store::{CommentDraft, TicketDraft, TicketPatch, TicketStore};
pub use tracker::Tracker;
pub use validate::{FieldErrors, TicketForm};
