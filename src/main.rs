//! Address Book - Main entry point
//!
//! Loads the saved address book, runs the interactive assistant on
//! stdin/stdout and saves the book again on exit.

use address_book::repositories::{DirectoryRepository, FileDirectoryRepository};
use address_book::{CommandHandler, Config, Session};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = Arc::new(FileDirectoryRepository::new(&config.book_path))
        as Arc<dyn DirectoryRepository>;

    let directory = match repository.load().await {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let handler = CommandHandler::new(config.birthday_window_days);
    let session = Session::new(
        BufReader::new(stdin()),
        stdout(),
        directory,
        repository,
        handler,
    );

    if let Err(e) = session.run().await {
        error!("Session ended with an error: {}", e);
        return Err(e);
    }

    info!("Address book session complete");
    Ok(())
}
