//! Command-line interface for ticket-desk

pub mod handlers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ticket-desk - a support ticket tracker
#[derive(Parser, Debug)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (overrides the per-user config.toml)
    #[arg(short, long, global = true, env = "TICKET_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply migrations and serve the web interface
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Apply pending database migrations
    Migrate,

    /// Insert sample tickets
    Seed {
        /// Number of tickets to create
        #[arg(short = 'n', long, default_value_t = 15)]
        count: usize,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve {
            host: None,
            port: None,
        }
    }
}
