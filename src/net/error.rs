//! Failure taxonomy for outbound HTTP calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Error returned by `net::api` and `net::identity` requests.
///
/// Every variant renders to a short human-readable string because the
/// display text is what ends up in a notification toast.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response. Carries the underlying
    /// client message verbatim so the toast matches what the browser saw.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("request failed: {0}")]
    Status(u16),

    /// The response arrived but its body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}
