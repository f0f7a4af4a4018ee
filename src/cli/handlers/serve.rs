use crate::api::{self, AppState, Views};
use crate::config::Settings;
use crate::error::Result;
use crate::storage::SqliteStorage;
use std::sync::Arc;

/// Handle the serve command
///
/// `host` and `port` override the configured listener address.
pub async fn handle_serve_command(
    settings: &Settings,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut server = settings.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let storage = SqliteStorage::connect(&settings.database).await?;
    storage.migrate().await?;

    let state = AppState::new(Arc::new(storage.clone()), Views::new()?);
    api::serve(&server, Arc::new(state)).await?;

    storage.pool().close().await;
    Ok(())
}
