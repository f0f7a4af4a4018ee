//! Layered application settings
//!
//! Sources, lowest precedence first: built-in defaults, the per-user
//! `config.toml`, an explicitly passed file, then `TICKET_DESK__*`
//! environment variables (`TICKET_DESK__SERVER__PORT=9000`).

use crate::error::Result;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "TICKET_DESK";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` to bind to
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Settings {
    /// Load settings from every source
    ///
    /// An explicitly passed file must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(user_config_file(), explicit)
    }

    fn load_from(user_file: Option<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite://ticket-desk.db")?
            .set_default("database.max_connections", 5)?
            .set_default("log.filter", "info")?;

        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

/// Location of the per-user config file, if the platform has one
fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ticket-desk").map(|dirs| dirs.config_dir().join("config.toml"))
}
