//! Error-family outcomes and the generic error dispatcher.
//!
//! The fixed-status methods hand the payload to the writer untouched.
//! [`ResponseWriter::error`] classifies first and always writes an envelope.

use axum::http::StatusCode;

use crate::http::payload::{Envelope, Payload, StatusMessage};
use crate::http::response::ResponseWriter;
use crate::http::sink::ResponseSink;

impl<S: ResponseSink + ?Sized> ResponseWriter<'_, S> {
    pub fn bad_request(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::BAD_REQUEST, payload.into());
    }

    pub fn unauthorized(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::UNAUTHORIZED, payload.into());
    }

    pub fn forbidden(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::FORBIDDEN, payload.into());
    }

    pub fn not_found(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::NOT_FOUND, payload.into());
    }

    pub fn method_not_allowed(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::METHOD_NOT_ALLOWED, payload.into());
    }

    pub fn unprocessable_entity(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::UNPROCESSABLE_ENTITY, payload.into());
    }

    pub fn internal_server_error(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::INTERNAL_SERVER_ERROR, payload.into());
    }

    pub fn service_unavailable(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::SERVICE_UNAVAILABLE, payload.into());
    }

    pub fn too_many_requests(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::TOO_MANY_REQUESTS, payload.into());
    }

    /// Classify the payload and write it as an envelope.
    ///
    /// Priority: status/message capability, then text, then error values.
    /// Anything else becomes 500 with the canonical reason phrase.
    pub fn error(self, payload: impl Into<Payload>) {
        let (status, message) = classify(payload.into());
        self.write_response(status, Payload::Envelope(Envelope::new(status, message)));
    }

    /// Shorthand for `error(Payload::classified(value))`.
    pub fn error_from<T: StatusMessage + ?Sized>(self, value: &T) {
        self.error(Payload::classified(value));
    }
}

fn classify(payload: Payload) -> (StatusCode, String) {
    match payload {
        Payload::Classified { code, message } => (code, message),
        Payload::Text(message) | Payload::Fault(message) => {
            (StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        Payload::Empty | Payload::Envelope(_) | Payload::Raw(_) | Payload::Unencodable(_) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            let reason = status.canonical_reason().unwrap_or_default();
            (status, reason.to_string())
        }
    }
}
