//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CheckStats, ErrorKind};

/// Prints the end-of-run outcome breakdown.
///
/// One line for the active/broken totals, then one line per error category
/// that actually occurred. Categories with zero hits are omitted.
pub fn print_check_statistics(stats: &CheckStats) {
    info!(
        "Check statistics: active={}, broken={}",
        stats.active_count(),
        stats.broken_count()
    );

    if stats.total_errors() == 0 {
        return;
    }

    info!("Failure breakdown:");
    for kind in ErrorKind::iter() {
        let count = stats.get_error_count(kind);
        if count > 0 {
            info!("  {}: {}", kind.as_str(), count);
        }
    }
}
