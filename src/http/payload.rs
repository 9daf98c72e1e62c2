//! Payload shapes accepted by the outcome methods.
//!
//! # Responsibilities
//! - Represent every input a handler may hand to the writer
//! - Define the `{code, message}` envelope written for text and errors
//! - Define the status/message capability used by the error dispatcher
//!
//! # Design Decisions
//! - Payload is a closed enum; dispatch order lives in the writer
//! - Structured values are converted to `serde_json::Value` up front, a
//!   conversion failure is carried to write time and swallowed there

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Normalized body for text and error payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: u16,
    pub message: String,
}

impl Envelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}

/// A value that knows which HTTP status and message describe it.
///
/// Takes priority over every other shape in
/// [`ResponseWriter::error`](crate::http::ResponseWriter::error).
pub trait StatusMessage {
    fn status_code(&self) -> StatusCode;
    fn message(&self) -> String;
}

/// Input to a single response write.
#[derive(Debug)]
pub enum Payload {
    /// No body at all.
    Empty,
    /// A plain string, wrapped in an [`Envelope`].
    Text(String),
    /// An error value, stored as its `Display` form and wrapped in an [`Envelope`].
    Fault(String),
    /// A value exposing [`StatusMessage`].
    Classified { code: StatusCode, message: String },
    /// An envelope that was already built, written unchanged.
    Envelope(Envelope),
    /// Structured JSON, written unchanged.
    Raw(serde_json::Value),
    /// Structured input whose JSON conversion failed.
    Unencodable(serde_json::Error),
}

impl Payload {
    pub fn text(message: impl Into<String>) -> Self {
        Payload::Text(message.into())
    }

    pub fn fault<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Payload::Fault(err.to_string())
    }

    pub fn classified<T>(value: &T) -> Self
    where
        T: StatusMessage + ?Sized,
    {
        Payload::Classified {
            code: value.status_code(),
            message: value.message(),
        }
    }

    /// Convert any serializable value into a pass-through payload.
    pub fn json<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(v) => Payload::Raw(v),
            Err(e) => Payload::Unencodable(e),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(v: serde_json::Value) -> Self {
        Payload::Raw(v)
    }
}

impl From<Envelope> for Payload {
    fn from(e: Envelope) -> Self {
        Payload::Envelope(e)
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Empty
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Payload::Empty, Into::into)
    }
}
