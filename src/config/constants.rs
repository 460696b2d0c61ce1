//! Configuration constants.
//!
//! This module defines the default tuning parameters for the prober and the
//! batch scheduler.

/// Default per-probe timeout in milliseconds.
/// Each attempt (HEAD, and the GET fallback if needed) is aborted at this
/// deadline independently.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of targets probed concurrently per batch.
/// Concurrency within a batch is bounded only by this chunk size.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Default pause between batches in milliseconds.
/// A simple pacing knob toward third-party storefronts, not a rate shaper.
pub const DEFAULT_BATCH_DELAY_MS: u64 = 300;

/// Default User-Agent string for probe requests.
///
/// Identifies the checker as an automated bot with a contact URL, per
/// courteous-crawler conventions. Storefront operators seeing this in their
/// logs can find out who is probing them and why.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "LinkStatusBot/1.0 (+https://link-status.dev/bot; link liveness checker)";

/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length accepted from input, in characters.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
