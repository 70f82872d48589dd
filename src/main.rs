//! Contact Book - Main entry point
//!
//! Runs the numbered command menu over stdin/stdout. Logs go to stderr so
//! they never mix with the conversation.

use anyhow::Result;
use contact_book::commands::{run_session, CommandProcessor};
use contact_book::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, today = ?config.today, "Configuration loaded");

    let mut processor = CommandProcessor::from_config(&config);
    if let Err(e) = run_session(&mut processor, io::stdin().lock(), io::stdout().lock()) {
        error!("Session ended by I/O failure: {}", e);
        return Err(e.into());
    }

    info!(contacts = processor.book().len(), "Contact book shutdown complete");
    Ok(())
}
