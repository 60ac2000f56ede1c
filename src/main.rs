//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `website_organizer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use website_organizer::initialization::init_logger_with;
use website_organizer::{run_copy_with, Config, CopyOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    println!("Attempting to copy website from: {}", config.url);
    println!("Saving files to: {}", config.output.display());

    let on_saved = |page: &std::path::Path| println!("Main page saved as: {}", page.display());

    match run_copy_with(&config, on_saved).await {
        Ok(CopyOutcome::Saved { .. }) => {
            println!(
                "Website files organized into folders in: {}",
                config.output.display()
            );
            Ok(())
        }
        Ok(CopyOutcome::FetchFailed(e)) => {
            // A failed download is reported, not treated as a failed run
            println!("Error downloading the page: {e}");
            Ok(())
        }
        Err(e) => {
            eprintln!("website_organizer error: {:#}", e);
            process::exit(1);
        }
    }
}
