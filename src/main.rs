//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_status::initialization::init_logger_with;
use link_status::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) => {
            println!(
                "Checked {} link{} ({} active, {} broken, {} skipped) in {:.1}s",
                report.total_targets,
                if report.total_targets == 1 { "" } else { "s" },
                report.active,
                report.broken,
                report.skipped,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("link_status error: {:#}", e);
            process::exit(1);
        }
    }
}
