//! HTTP client initialization.
//!
//! This module provides the caller-owned HTTP client used by the probe
//! pipeline. The client is constructed once and passed in explicitly; there
//! is no lazily-initialized process-wide client.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::MAX_REDIRECT_HOPS;

/// Initializes the HTTP client used for probing.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following enabled (up to [`MAX_REDIRECT_HOPS`] hops)
/// - Rustls TLS backend
///
/// Timeout and User-Agent are applied per request by the prober rather than
/// baked into the client, so one shared client can serve probes with
/// differing options.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
