//! Core ticket types, construction and validation

mod builders;
mod ticket;
pub mod validation;

pub use builders::TicketBuilder;
pub use ticket::{NewTicket, Priority, Status, Ticket, TicketChanges, TicketId, UnknownVariant};
pub use validation::{TicketForm, ValidationErrors};
