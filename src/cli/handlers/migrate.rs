use crate::config::Settings;
use crate::error::Result;
use crate::storage::SqliteStorage;

/// Handle the migrate command
pub async fn handle_migrate_command(settings: &Settings) -> Result<()> {
    let storage = SqliteStorage::connect(&settings.database).await?;
    storage.migrate().await?;
    storage.pool().close().await;
    Ok(())
}
