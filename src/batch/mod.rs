//! Batch scheduler.
//!
//! Fans the single-link prober out over many targets in consecutive chunks:
//! all probes within a chunk run concurrently, every probe in a chunk must
//! resolve before the next chunk starts, and a configurable pause separates
//! chunks. The scheduler itself has no failure mode (its unit of work
//! cannot fail) and holds no state across invocations.

use std::time::Duration;

use futures::future::join_all;
use log::debug;

use crate::config::{DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE};
use crate::models::{BatchResult, CheckTarget};
use crate::probe::{check_link, ProbeOptions};

/// Tuning for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of targets probed concurrently per chunk. Values below 1 are
    /// treated as 1.
    pub batch_size: usize,
    /// Pause between chunks. Not applied after the final chunk.
    pub delay: Duration,
    /// Per-probe tuning, shared by every probe in the run.
    pub probe: ProbeOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
            probe: ProbeOptions::default(),
        }
    }
}

/// Probes every target, in chunks, and returns one result per target id.
///
/// Targets are partitioned into consecutive chunks of at most
/// `options.batch_size`, preserving input order. Chunks are processed
/// strictly in sequence; probes within a chunk run concurrently with no
/// completion-order guarantee. A broken link never short-circuits anything:
/// the run always covers the whole input and reports a full picture.
///
/// The returned mapping's key set equals the input id set (identifiers are
/// assumed caller-unique).
pub async fn check_links_in_batch(
    client: &reqwest::Client,
    targets: &[CheckTarget],
    options: &BatchOptions,
) -> BatchResult {
    let mut results = BatchResult::with_capacity(targets.len());
    let batch_size = options.batch_size.max(1);
    let chunk_count = targets.len().div_ceil(batch_size);

    for (index, chunk) in targets.chunks(batch_size).enumerate() {
        debug!(
            "Starting batch {}/{} ({} targets)",
            index + 1,
            chunk_count,
            chunk.len()
        );

        let probes = chunk.iter().map(|target| async move {
            let result = check_link(client, &target.url, &options.probe).await;
            (target.id.clone(), result)
        });
        for (id, result) in join_all(probes).await {
            results.insert(id, result);
        }

        if index + 1 < chunk_count && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    results
}
