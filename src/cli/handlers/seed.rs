use crate::config::Settings;
use crate::core::{NewTicket, Priority, Status, Ticket, TicketBuilder};
use crate::error::Result;
use crate::storage::{SqliteStorage, TicketRepository};
use tracing::info;

const SAMPLE_TITLES: [&str; 8] = [
    "Login page times out",
    "Export to CSV drops rows",
    "Password reset email not sent",
    "Dashboard loads slowly",
    "Typo on pricing page",
    "Mobile menu does not close",
    "Invoice totals off by one cent",
    "Search ignores accents",
];

/// Deterministic sample tickets cycling through every status and priority
///
/// Every fifth ticket has no description.
#[must_use]
pub fn sample_tickets(count: usize) -> Vec<NewTicket> {
    (0..count)
        .map(|i| {
            let title = SAMPLE_TITLES[i % SAMPLE_TITLES.len()];
            let mut builder = TicketBuilder::new()
                .title(format!("{title} #{}", i + 1))
                .status(Status::ALL[i % Status::ALL.len()])
                .priority(Priority::ALL[(i / Status::ALL.len()) % Priority::ALL.len()]);
            if i % 5 != 4 {
                builder = builder.description(format!("Reported by customer {}.", i + 1));
            }
            builder.build()
        })
        .collect()
}

/// Handle the seed command
pub async fn handle_seed_command(settings: &Settings, count: usize) -> Result<Vec<Ticket>> {
    let storage = SqliteStorage::connect(&settings.database).await?;
    storage.migrate().await?;

    let mut created = Vec::with_capacity(count);
    for ticket in sample_tickets(count) {
        created.push(storage.create(ticket).await?);
    }

    info!("Seeded {} tickets", created.len());
    storage.pool().close().await;
    Ok(created)
}
