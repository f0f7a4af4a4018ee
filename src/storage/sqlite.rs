//! SQLite-backed ticket storage

use crate::config::DatabaseSettings;
use crate::core::{NewTicket, Ticket, TicketChanges, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::storage::{Page, PageRequest, TicketFilter, TicketRepository, search_key};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

const TICKET_COLUMNS: &str = "id, title, description, status, priority, created_at, updated_at";

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Ticket storage over a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for the configured database, creating the file if needed
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&settings.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;

        info!("Connected to database {}", settings.url);
        Ok(Self::new(pool))
    }

    /// Apply any pending migrations
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TicketRepository for SqliteStorage {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket> {
        let now = Utc::now();
        let title_search = search_key(&ticket.title);
        let description_search = ticket.description.as_deref().map(search_key);
        let created = sqlx::query_as::<_, Ticket>(&format!(
            "INSERT INTO tickets
                 (title, description, status, priority, created_at, updated_at,
                  title_search, description_search)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(ticket.title)
        .bind(ticket.description)
        .bind(ticket.status)
        .bind(ticket.priority)
        .bind(now)
        .bind(now)
        .bind(title_search)
        .bind(description_search)
        .fetch_one(&self.pool)
        .await?;

        debug!("Created ticket {}", created.id);
        Ok(created)
    }

    async fn find(&self, id: TicketId) -> Result<Ticket> {
        sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| TicketDeskError::not_found(id))
    }

    async fn update(&self, id: TicketId, changes: TicketChanges) -> Result<Ticket> {
        let title_search = search_key(&changes.title);
        let replace_description = changes.description.is_some();
        let description = changes.description.flatten();
        let description_search = description.as_deref().map(search_key);
        let updated = sqlx::query_as::<_, Ticket>(&format!(
            "UPDATE tickets
             SET title = ?, title_search = ?,
                 description = CASE WHEN ? THEN ? ELSE description END,
                 description_search = CASE WHEN ? THEN ? ELSE description_search END,
                 status = COALESCE(?, status), priority = COALESCE(?, priority),
                 updated_at = ?
             WHERE id = ?
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(changes.title)
        .bind(title_search)
        .bind(replace_description)
        .bind(description)
        .bind(replace_description)
        .bind(description_search)
        .bind(changes.status)
        .bind(changes.priority)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| TicketDeskError::not_found(id))?;

        debug!("Updated ticket {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, id: TicketId) -> Result<()> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TicketDeskError::not_found(id));
        }

        debug!("Deleted ticket {id}");
        Ok(())
    }

    async fn list(&self, filter: &TicketFilter, page: PageRequest) -> Result<Page<Ticket>> {
        let total = self.count(filter).await?;

        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {TICKET_COLUMNS} FROM tickets"));
        filter.push_where(&mut qb);
        qb.push(" ORDER BY updated_at DESC, id DESC LIMIT ")
            .push_bind(i64::from(page.per_page()))
            .push(" OFFSET ")
            .push_bind(page.offset());

        debug!("Listing tickets: {}", qb.sql());
        let items = qb.build_query_as::<Ticket>().fetch_all(&self.pool).await?;

        Ok(Page::new(items, total, page))
    }

    async fn count(&self, filter: &TicketFilter) -> Result<u64> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tickets");
        filter.push_where(&mut qb);

        let count: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
