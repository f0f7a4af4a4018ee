//! ticket-desk - support ticket tracker
//!
//! Entry point: parses the command line, loads settings, installs logging
//! and dispatches to the command handlers.

use anyhow::Context;
use clap::Parser;
use ticket_desk::cli::handlers::{
    handle_migrate_command, handle_seed_command, handle_serve_command, init_logging,
};
use ticket_desk::cli::{Cli, Commands};
use ticket_desk::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&settings, cli.verbose);

    match cli.command.unwrap_or_default() {
        Commands::Serve { host, port } => handle_serve_command(&settings, host, port)
            .await
            .context("server failed")?,
        Commands::Migrate => handle_migrate_command(&settings)
            .await
            .context("migration failed")?,
        Commands::Seed { count } => {
            let created = handle_seed_command(&settings, count)
                .await
                .context("seeding failed")?;
            println!("Created {} sample tickets", created.len());
        },
    }

    Ok(())
}
