//! Error handling and check statistics.
//!
//! This module provides:
//! - The closed failure taxonomy assigned to broken links
//! - Pure categorization of transport failures
//! - Thread-safe outcome statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::classify_transport_error;
pub use stats::CheckStats;
pub use types::{ErrorKind, InitializationError};
