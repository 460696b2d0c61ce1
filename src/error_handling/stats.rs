//! Check statistics tracking.
//!
//! Thread-safe counters for probe outcomes, shared across concurrent probes
//! within a run via `Arc`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorKind;

/// Thread-safe outcome statistics for one checking run.
///
/// Tracks active/broken totals plus a per-[`ErrorKind`] breakdown using
/// atomic counters. All counters start at zero; every kind is pre-registered
/// so increments never allocate.
pub struct CheckStats {
    active: AtomicUsize,
    broken: AtomicUsize,
    errors: HashMap<ErrorKind, AtomicUsize>,
}

impl CheckStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }
        CheckStats {
            active: AtomicUsize::new(0),
            broken: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records one probe result: the status total plus, for broken links,
    /// the error kind breakdown.
    pub fn record(&self, result: &crate::models::LinkCheckResult) {
        if result.is_active() {
            self.active.fetch_add(1, Ordering::Relaxed);
        } else {
            self.broken.fetch_add(1, Ordering::Relaxed);
        }
        if let Some(kind) = result.error_type {
            self.increment_error(kind);
        }
    }

    /// Increments the counter for an error kind.
    ///
    /// All kinds are registered in `new()`; a miss indicates an enum variant
    /// added without re-running initialization, so it is logged rather than
    /// panicking.
    pub fn increment_error(&self, kind: ErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in CheckStats initialization.",
                kind
            );
        }
    }

    /// Count of links classified active.
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Count of links classified broken.
    pub fn broken_count(&self) -> usize {
        self.broken.load(Ordering::SeqCst)
    }

    /// Count for one error kind.
    pub fn get_error_count(&self, kind: ErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all error kinds.
    pub fn total_errors(&self) -> usize {
        ErrorKind::iter().map(|k| self.get_error_count(k)).sum()
    }
}

impl Default for CheckStats {
    fn default() -> Self {
        Self::new()
    }
}
