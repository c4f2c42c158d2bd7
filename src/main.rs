//! Contact Book - Main entry point
//!
//! This is the main executable for the contact book: an interactive shell
//! over the in-memory address book.

use anyhow::Result;
use contact_book::shell::run_shell;
use contact_book::{Config, ContactService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout belongs to the shell)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        upcoming_days = config.upcoming_days,
        "Starting contact book shell"
    );

    let mut service = ContactService::new(config.upcoming_days);

    if let Err(e) = run_shell(&mut service) {
        error!("Shell terminated with error: {}", e);
        return Err(e);
    }

    info!("Session closed");
    Ok(())
}
