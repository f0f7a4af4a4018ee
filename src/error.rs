//! Error types for ticket-desk

use crate::core::TicketId;
use thiserror::Error;

/// Main error type for ticket-desk
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// No ticket exists with the referenced id
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TicketDeskError {
    /// Not-found error for a ticket id
    #[must_use]
    pub fn not_found(id: TicketId) -> Self {
        Self::TicketNotFound { id: id.to_string() }
    }

    /// Whether the error is a missing ticket
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound { .. })
    }
}

/// Result type alias for ticket-desk operations
pub type Result<T> = std::result::Result<T, TicketDeskError>;
