//! Single-link prober.
//!
//! One probe produces exactly one [`LinkCheckResult`] and never fails across
//! its public boundary: every failure mode is captured into the result's
//! status and error fields. Attempt outcomes are modeled as explicit values
//! and handed to a pure classification step, so no control flow rides on
//! error propagation.

use std::time::{Duration, Instant};

use log::debug;
use reqwest::header::USER_AGENT;
use reqwest::Method;

use crate::config::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};
use crate::error_handling::{classify_transport_error, ErrorKind};
use crate::models::{LinkCheckResult, LinkStatus};

/// Tuning for a single probe.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Deadline for the whole probe. Each request is aborted at whatever
    /// remains of this budget, so a HEAD that burns the full budget leaves
    /// nothing for the GET fallback.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Outcome of one request attempt: either a response status was observed or
/// the transport failed before any response arrived.
enum AttemptOutcome {
    Response(u16),
    Failed(reqwest::Error),
}

/// Probes one URL for liveness.
///
/// Tries a lightweight HEAD first, falling back to a full GET when the HEAD
/// attempt fails or the server rejects the method. Redirects are followed
/// transparently; the final hop's status governs classification.
///
/// Never returns an error: transport failures and error statuses alike are
/// folded into the returned [`LinkCheckResult`].
pub async fn check_link(
    client: &reqwest::Client,
    url: &str,
    options: &ProbeOptions,
) -> LinkCheckResult {
    let start = Instant::now();
    let deadline = start + options.timeout;

    debug!("Probing {url} (HEAD)");
    let head = attempt(client, Method::HEAD, url, options, deadline).await;

    let outcome = if needs_get_fallback(&head) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            head
        } else {
            debug!("HEAD attempt failed for {url}, falling back to GET");
            let get = attempt(client, Method::GET, url, options, deadline).await;
            match (head, get) {
                // A method-rejection response is still a response; keep its
                // status when the fallback cannot produce one at all
                (head @ AttemptOutcome::Response(_), AttemptOutcome::Failed(_)) => head,
                (_, get) => get,
            }
        }
    } else {
        head
    };

    let response_ms = start.elapsed().as_millis() as u64;
    resolve(outcome, response_ms)
}

/// Sends one request, aborting at whatever remains of the probe deadline.
async fn attempt(
    client: &reqwest::Client,
    method: Method,
    url: &str,
    options: &ProbeOptions,
    deadline: Instant,
) -> AttemptOutcome {
    let remaining = deadline.saturating_duration_since(Instant::now());
    let result = client
        .request(method, url)
        .header(USER_AGENT, options.user_agent.as_str())
        .timeout(remaining)
        .send()
        .await;
    match result {
        Ok(response) => AttemptOutcome::Response(response.status().as_u16()),
        Err(e) => AttemptOutcome::Failed(e),
    }
}

/// Whether a HEAD outcome warrants retrying the URL with GET.
///
/// Transport failures always do, except a timeout: the deadline budget is
/// spent, and a server that let HEAD hang will do the same for GET. A
/// received response is authoritative unless the server rejected the method
/// itself (405 Method Not Allowed, 501 Not Implemented).
fn needs_get_fallback(head: &AttemptOutcome) -> bool {
    match head {
        AttemptOutcome::Failed(e) => !e.is_timeout(),
        AttemptOutcome::Response(status) => matches!(*status, 405 | 501),
    }
}

/// Folds the final attempt outcome into a result. Pure.
fn resolve(outcome: AttemptOutcome, response_ms: u64) -> LinkCheckResult {
    match outcome {
        AttemptOutcome::Response(code) => {
            if (200..=399).contains(&code) {
                LinkCheckResult {
                    status: LinkStatus::Active,
                    http_status: Some(code),
                    response_ms,
                    error_type: None,
                }
            } else {
                LinkCheckResult {
                    status: LinkStatus::Broken,
                    http_status: Some(code),
                    response_ms,
                    error_type: Some(ErrorKind::HttpError),
                }
            }
        }
        AttemptOutcome::Failed(e) => LinkCheckResult {
            status: LinkStatus::Broken,
            http_status: None,
            response_ms,
            error_type: Some(classify_transport_error(&e)),
        },
    }
}
