//! ticket-desk - a server-rendered support ticket tracker
//!
//! Tickets live in a single SQLite table and are managed through HTML pages:
//! - List with case-insensitive search, status and priority filters, 10 per page
//! - Create, view, update and permanently delete tickets
//! - Field-level validation with the submitted input preserved on rejection
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_desk::core::{Priority, TicketBuilder};
//! use ticket_desk::storage::{PageRequest, SqliteStorage, TicketFilter, TicketRepository};
//!
//! let storage = SqliteStorage::connect(&settings.database).await?;
//! storage.migrate().await?;
//!
//! let ticket = TicketBuilder::new()
//!     .title("Fix login bug")
//!     .priority(Priority::High)
//!     .build();
//! storage.create(ticket).await?;
//!
//! let filter = TicketFilter::new().search(Some("login"));
//! let page = storage.list(&filter, PageRequest::new(1)).await?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
