//! Core data model for link checks.
//!
//! These are the input/output shapes of the probe pipeline: what the caller
//! submits (`CheckTarget`) and what comes back per link (`LinkCheckResult`).

use std::collections::HashMap;

use serde::Serialize;

use crate::error_handling::ErrorKind;

/// One item to probe: a caller-defined identifier and the URL to check.
///
/// Results are keyed by `id`, not by URL: multiple catalog entries may share
/// a URL, and an entry's URL may change between lookups. Identifiers are
/// assumed unique within a single batch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    /// Caller-defined identifier (e.g. a catalog key).
    pub id: String,
    /// The URL to probe.
    pub url: String,
}

impl CheckTarget {
    /// Creates a target from an identifier and URL.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Liveness verdict for a probed link.
///
/// Binary on purpose: the prober always reaches a verdict. An "unknown" state
/// only exists in external persistence as a never-checked default, never as a
/// prober output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The link responded with a 2xx/3xx status.
    Active,
    /// The link failed: error status, transport failure, or timeout.
    Broken,
}

impl LinkStatus {
    /// Wire/display name for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Active => "active",
            LinkStatus::Broken => "broken",
        }
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing one URL at one point in time.
///
/// Invariants upheld by the prober:
/// - `http_status` is present iff a response was received, whatever its code.
/// - `error_type` is present iff `status` is [`LinkStatus::Broken`].
/// - `response_ms` covers the whole attempt, HEAD and GET fallback included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheckResult {
    /// Liveness verdict.
    pub status: LinkStatus,
    /// Numeric HTTP status observed, absent when no response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Elapsed wall-clock time from attempt start to resolution, in whole
    /// milliseconds.
    pub response_ms: u64,
    /// Failure category, absent for active links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorKind>,
}

impl LinkCheckResult {
    /// True when the link was classified as live.
    pub fn is_active(&self) -> bool {
        self.status == LinkStatus::Active
    }
}

/// Result mapping of one batch invocation: target id to its check result.
///
/// Contains exactly one entry per attempted input target. Iteration order is
/// unspecified.
pub type BatchResult = HashMap<String, LinkCheckResult>;
