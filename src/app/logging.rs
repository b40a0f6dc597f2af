//! Progress logging utilities.

use log::info;

/// Logs geocoding progress.
///
/// # Arguments
///
/// * `start_time` - The start time of the geocoding batch
/// * `processed` - Coordinates resolved so far
/// * `total` - Total distinct coordinates in the batch
pub fn log_progress(start_time: std::time::Instant, processed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Resolved {}/{} coordinates in {:.2} seconds (~{:.2} lookups/sec)",
        processed, total, elapsed_secs, rate
    );
}
