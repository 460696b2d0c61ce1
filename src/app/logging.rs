//! Progress logging utilities.

use log::info;

/// Logs progress information about link checking.
pub fn log_progress(start_time: std::time::Instant, checked: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        checked as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} links in {:.2} seconds (~{:.2} links/sec)",
        checked, total, elapsed_secs, rate
    );
}
