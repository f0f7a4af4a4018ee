//! Test utilities for ticket-desk
//!
//! Common fixtures for tests that need a real, migrated database.

#![cfg(test)]

use crate::config::DatabaseSettings;
use crate::core::{NewTicket, Priority, Status, Ticket, TicketBuilder};
use crate::storage::{SqliteStorage, TicketRepository};
use tempfile::TempDir;

/// Test fixture owning a migrated SQLite database in a temporary directory
pub struct TestDatabase {
    pub temp_dir: TempDir,
    pub storage: SqliteStorage,
}

impl TestDatabase {
    /// Create a fresh, migrated database
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let settings = DatabaseSettings {
            url: format!("sqlite://{}", temp_dir.path().join("tickets.db").display()),
            max_connections: 1,
        };

        let storage = SqliteStorage::connect(&settings)
            .await
            .expect("Failed to open database");
        storage.migrate().await.expect("Failed to migrate database");

        Self { temp_dir, storage }
    }

    /// Create and store a ticket with default status and priority
    pub async fn create_ticket(&self, title: &str) -> Ticket {
        self.storage
            .create(TicketBuilder::new().title(title).build())
            .await
            .expect("Failed to save ticket")
    }
}

/// Create an unsaved ticket with a generated description
pub fn create_test_ticket(title: &str, priority: Priority, status: Status) -> NewTicket {
    TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .priority(priority)
        .status(status)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TicketFilter;

    #[tokio::test]
    async fn test_database_starts_empty() {
        let db = TestDatabase::new().await;
        assert_eq!(db.storage.count(&TicketFilter::new()).await.unwrap(), 0);
        assert!(db.temp_dir.path().join("tickets.db").exists());
    }

    #[test]
    fn test_create_test_ticket() {
        let ticket = create_test_ticket("Bug fix", Priority::High, Status::Closed);
        assert_eq!(ticket.description.as_deref(), Some("Description for Bug fix"));
        assert_eq!(ticket.status, Status::Closed);
    }
}
