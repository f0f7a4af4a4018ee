use crate::core::{NewTicket, Ticket, TicketChanges, TicketId};
use crate::error::Result;
use crate::storage::{Page, PageRequest, TicketFilter};
use async_trait::async_trait;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface for storing and retrieving tickets,
/// allowing for different storage implementations. Every mutating method
/// is a single atomic operation; a missing id yields
/// [`crate::error::TicketDeskError::TicketNotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Stores a new ticket, assigning its id and timestamps
    async fn create(&self, ticket: NewTicket) -> Result<Ticket>;

    /// Loads a ticket by ID
    async fn find(&self, id: TicketId) -> Result<Ticket>;

    /// Applies validated changes and refreshes `updated_at`
    async fn update(&self, id: TicketId, changes: TicketChanges) -> Result<Ticket>;

    /// Permanently deletes a ticket by ID
    async fn delete(&self, id: TicketId) -> Result<()>;

    /// Loads one page of tickets matching the filter, most recently
    /// updated first
    async fn list(&self, filter: &TicketFilter, page: PageRequest) -> Result<Page<Ticket>>;

    /// Counts tickets matching the filter
    async fn count(&self, filter: &TicketFilter) -> Result<u64>;
}
