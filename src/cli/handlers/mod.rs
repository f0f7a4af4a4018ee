//! Command handlers
//!
//! Each handler opens the configured database itself and returns the
//! crate `Result`, leaving reporting to `main`.

mod migrate;
mod seed;
mod serve;

pub use migrate::handle_migrate_command;
pub use seed::{handle_seed_command, sample_tickets};
pub use serve::handle_serve_command;

use crate::config::Settings;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber; call once, from `main`
///
/// `RUST_LOG` wins over the configured filter; `verbose` wins over both.
pub fn init_logging(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
