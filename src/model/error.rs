//! Error types for the directory data source.
//!
//! Structured errors per boundary, following Railway-Oriented Programming:
//! variants compose via `?`, and the `Display` output is the human-readable
//! message the core surfaces into a failed load state.
//!
//! The search core itself has no error types: queries are normalized, never
//! rejected, and matching/filtering are total functions.

use thiserror::Error;

/// Failure fetching the salesman directory from its source.
///
/// The core does not interpret variants; any source error is surfaced
/// uniformly as a failed load whose message is this error's `Display`
/// output. A failed load is retried by re-issuing the load intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing service could not be reached.
    #[error("Network connection error")]
    Network,

    /// The payload arrived but could not be understood.
    #[error("Data corrupted")]
    Corrupted,

    /// A failure the source cannot classify.
    #[error("Unknown error occurred")]
    Unknown,
}

/// Malformed JSON directory payload.
///
/// A construction-time error of the JSON-backed source, never a runtime
/// state of the search core.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The payload is not a valid JSON array of salesman records.
    #[error("Invalid directory payload: {message}")]
    InvalidPayload {
        /// The decoder error message describing what went wrong.
        message: String,
    },
}
