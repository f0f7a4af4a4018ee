//! Ticket persistence
//!
//! The [`TicketRepository`] trait is the seam between request handlers and
//! the database; [`SqliteStorage`] is its only implementation.

mod query;
mod repository;
mod sqlite;

pub use query::{PER_PAGE, Page, PageRequest, Predicate, TicketFilter, search_key};
#[cfg(test)]
pub use repository::MockTicketRepository;
pub use repository::TicketRepository;
pub use sqlite::SqliteStorage;
