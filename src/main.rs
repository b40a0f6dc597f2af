//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `trip_ledger` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use trip_ledger::initialization::init_logger_with;
use trip_ledger::{run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting LOCATIONIQ_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the parse using the library
    match run_report(config).await {
        Ok(report) => {
            println!(
                "Extracted {} trip{} from {} record{} across {} month{} in {:.1}s",
                report.trip_count,
                if report.trip_count == 1 { "" } else { "s" },
                report.total_records,
                if report.total_records == 1 { "" } else { "s" },
                report.month_count,
                if report.month_count == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if report.geocoding.fallbacks > 0 {
                println!(
                    "{} address{} fell back to coordinates - see the log for details",
                    report.geocoding.fallbacks,
                    if report.geocoding.fallbacks == 1 {
                        ""
                    } else {
                        "es"
                    }
                );
            }
            println!(
                "Trips saved in {}, monthly summary in {}",
                report.trips_path.display(),
                report.summary_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("trip_ledger error: {:#}", e);
            process::exit(1);
        }
    }
}
