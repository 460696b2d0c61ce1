//! Error type definitions.
//!
//! This module defines the failure taxonomy assigned to broken links and the
//! error types for initialization failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure categories assigned to broken links.
///
/// This is a closed set: every probe failure collapses into exactly one of
/// these values, and nothing else is ever assigned. Failures that match no
/// specific heuristic fall through to [`ErrorKind::Unknown`] rather than
/// surfacing a raw error to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The attempt was aborted after exceeding the configured timeout.
    Timeout,
    /// Connection-level failure: refused connection, DNS failure, unreachable
    /// host.
    Network,
    /// Certificate or TLS validation failure.
    Ssl,
    /// A response was received but its status code indicates failure
    /// (outside 200-399).
    HttpError,
    /// Transport failure matching no specific heuristic.
    Unknown,
}

impl ErrorKind {
    /// Wire name for the category, as persisted by callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Network => "network",
            ErrorKind::Ssl => "ssl",
            ErrorKind::HttpError => "http_error",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
