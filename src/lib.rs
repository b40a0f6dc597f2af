//! trip_ledger library: trip extraction and geocoding
//!
//! This library ingests a location-history export, filters it down to vehicle
//! trips, reverse-geocodes trip endpoints through a cached, rate-limited
//! client, and aggregates the results into monthly mileage summaries.
//!
//! # Example
//!
//! ```no_run
//! use trip_ledger::{run_report, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("timeline.json"),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config).await?;
//! println!("Extracted {} trips across {} months",
//!          report.trip_count, report.month_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod aggregate;
mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod geocode;
pub mod initialization;
pub mod model;
pub mod timeline;

// Re-export public API
pub use config::{Config, GeocoderChoice, LogFormat, LogLevel};
pub use error_handling::{InitializationError, InputError};
pub use run::{run_report, ParseReport};

// Internal run module (contains the end-to-end orchestration)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::aggregate::monthly_summaries;
    use crate::app::{log_progress, print_geocoding_statistics};
    use crate::config::{Config, PROGRESS_LOG_INTERVAL};
    use crate::export::{export_summary_csv, export_trips_csv, export_trips_jsonl};
    use crate::geocode::provider::GeocoderBackend;
    use crate::geocode::stats::StatsSnapshot;
    use crate::geocode::GeocodeSession;
    use crate::initialization::init_client;
    use crate::model::load_activity_records;
    use crate::timeline::parse_timeline;

    /// Results of a parsing run.
    ///
    /// Contains summary statistics and metadata about the completed run.
    #[derive(Debug, Clone)]
    pub struct ParseReport {
        /// Number of records in the input file
        pub total_records: usize,
        /// Number of records that qualified as vehicle trips
        pub trip_count: usize,
        /// Number of distinct calendar months among the trips
        pub month_count: usize,
        /// Geocoding statistics for the run
        pub geocoding: StatsSnapshot,
        /// Path the trips CSV was written to
        pub trips_path: PathBuf,
        /// Path the monthly summary CSV was written to
        pub summary_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full parse with the provided configuration.
    ///
    /// This is the main entry point for the library. It loads the activity
    /// records, extracts and geocodes vehicle trips, aggregates monthly
    /// summaries, writes the configured exports, and logs statistics.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (input path, geocoder, outputs)
    ///
    /// # Returns
    ///
    /// Returns a `ParseReport` containing summary statistics, or an error if
    /// the run failed to complete.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read, or is not a JSON array of records
    /// - The HTTP client cannot be initialized
    /// - An export file cannot be written
    ///
    /// Geocoding failures are NOT errors: they degrade individual addresses
    /// to formatted coordinates and show up in the statistics.
    pub async fn run_report(config: Config) -> Result<ParseReport> {
        let records = load_activity_records(&config.file)
            .await
            .context("Failed to load activity records")?;
        info!("Loaded {} activity records from {}", records.len(), config.file.display());

        let backend = GeocoderBackend::from_config(&config);
        info!("Reverse geocoding via {}", backend.label());
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let session = GeocodeSession::new(backend, client);

        let start_time = std::time::Instant::now();

        let trips = parse_timeline(
            &records,
            &session,
            config.default_purpose,
            |processed, total| {
                if processed % PROGRESS_LOG_INTERVAL == 0 || processed == total {
                    log_progress(start_time, processed, total);
                }
            },
        )
        .await;

        let summaries = monthly_summaries(&trips);

        let exported = export_trips_csv(&trips, &config.trips_out)
            .context("Failed to export trips CSV")?;
        info!("Wrote {} trips to {}", exported, config.trips_out.display());

        let exported = export_summary_csv(&summaries, &config.summary_out)
            .context("Failed to export monthly summary CSV")?;
        info!(
            "Wrote {} monthly summaries to {}",
            exported,
            config.summary_out.display()
        );

        if let Some(jsonl_out) = &config.jsonl_out {
            export_trips_jsonl(&trips, jsonl_out).context("Failed to export trips JSONL")?;
            info!("Wrote trips JSONL to {}", jsonl_out.display());
        }

        print_geocoding_statistics(session.stats());

        Ok(ParseReport {
            total_records: records.len(),
            trip_count: trips.len(),
            month_count: summaries.len(),
            geocoding: session.stats().snapshot(),
            trips_path: config.trips_out.clone(),
            summary_path: config.summary_out.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
