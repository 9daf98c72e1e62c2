//! Error types for response writing.
//!
//! None of these cross the outcome-method API. They are handed to
//! [`ResponseSink::report`](crate::http::ResponseSink::report) after the
//! status line has already been committed.

use thiserror::Error;

/// Failures that can happen while a response is being written.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The payload could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink rejected the body bytes.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A header name or value was not valid HTTP.
    #[error("invalid header {name:?}")]
    InvalidHeader { name: String },
}
