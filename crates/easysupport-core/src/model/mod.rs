//! Ticket data model: records, enums, and identifiers.

mod ticket;

pub use ticket::{Comment, ParseEnumError, Priority, Status, Ticket, TicketId};
