//! Transport failure categorization.
//!
//! Classification is a pure function of the structured attempt outcome: the
//! prober hands over the `reqwest::Error` it observed, and these functions
//! decide which [`ErrorKind`] the failure collapses into.

use std::error::Error as _;

use super::types::ErrorKind;

/// Categorizes a transport-level `reqwest::Error` into an [`ErrorKind`].
///
/// Only called when no response was received at all; response status codes
/// are handled by the prober before classification. Checks, in order:
///
/// 1. Timeout abort (`reqwest::Error::is_timeout`).
/// 2. Certificate/TLS signatures in the error chain. reqwest reports TLS
///    validation failures as connect errors, so this must run before the
///    generic network check.
/// 3. Connection/DNS/network signatures, or `is_connect`.
/// 4. Everything else collapses to [`ErrorKind::Unknown`].
pub fn classify_transport_error(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        return ErrorKind::Timeout;
    }
    classify_failure_text(&error_chain_text(error), error.is_connect())
}

/// Classifies a failure by its message text and connect flag.
///
/// Split out from [`classify_transport_error`] so the signature heuristics
/// stay testable without manufacturing real `reqwest::Error` values.
/// `message` is expected to be lowercase.
pub fn classify_failure_text(message: &str, is_connect: bool) -> ErrorKind {
    const TLS_SIGNATURES: [&str; 6] = [
        "certificate",
        "cert ",
        "ssl",
        "tls",
        "handshake",
        "unknownissuer",
    ];
    const NETWORK_SIGNATURES: [&str; 7] = [
        "dns",
        "failed to lookup",
        "connection refused",
        "connection reset",
        "unreachable",
        "connect",
        "network",
    ];

    if TLS_SIGNATURES.iter().any(|sig| message.contains(sig)) {
        return ErrorKind::Ssl;
    }
    if is_connect || NETWORK_SIGNATURES.iter().any(|sig| message.contains(sig)) {
        return ErrorKind::Network;
    }
    ErrorKind::Unknown
}

/// Flattens an error and all its sources into one lowercase string.
///
/// reqwest's top-level messages are generic ("error sending request"); the
/// useful signatures live further down the chain (hyper, rustls, the OS).
fn error_chain_text(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text.to_lowercase()
}
