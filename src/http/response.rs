//! JSON response writer.
//!
//! # Responsibilities
//! - Hold the default headers for one response
//! - Apply header adds/deletes to the sink as they are requested
//! - Normalize the payload and write headers, status, and body once
//!
//! # Design Decisions
//! - Outcome methods consume the writer, one writer per response
//! - Text and error payloads are wrapped in an [`Envelope`], structured ones are not
//! - Encoding and sink failures are reported to the sink, never returned

use axum::http::{
    header::{HeaderName, HeaderValue, CONTENT_TYPE},
    HeaderMap, StatusCode,
};

use crate::config::WriterConfig;
use crate::error::WriteError;
use crate::http::payload::{Envelope, Payload};
use crate::http::sink::ResponseSink;

pub const APPLICATION_JSON: &str = "application/json";

/// Writes one JSON response into a borrowed sink.
pub struct ResponseWriter<'a, S: ResponseSink + ?Sized> {
    sink: &'a mut S,
    defaults: HeaderMap,
}

impl<'a, S: ResponseSink + ?Sized> ResponseWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        Self { sink, defaults }
    }

    /// Create a writer whose default headers come from configuration.
    ///
    /// Entries that fail to parse are reported and skipped; a validated
    /// config never has any. An unusable content type falls back to
    /// `application/json`.
    pub fn with_config(sink: &'a mut S, config: &WriterConfig) -> Self {
        let mut writer = Self::new(sink);
        writer.set_default(CONTENT_TYPE.as_str(), &config.content_type);
        for (name, value) in &config.default_headers {
            writer.set_default(name, value);
        }
        writer
    }

    fn set_default(&mut self, name: &str, value: &str) {
        match parse_header(name, value) {
            Ok((name, value)) => {
                self.defaults.insert(name, value);
            }
            Err(e) => self.sink.report(&e),
        }
    }

    /// Append a header value on the sink, keeping existing values.
    pub fn add_header(self, key: &str, value: &str) -> Self {
        match parse_header(key, value) {
            Ok((name, value)) => {
                self.sink.headers_mut().append(name, value);
            }
            Err(e) => self.sink.report(&e),
        }
        self
    }

    /// Remove every value of a header, including a default one.
    pub fn delete_header(mut self, key: &str) -> Self {
        match HeaderName::from_bytes(key.as_bytes()) {
            Ok(name) => {
                self.sink.headers_mut().remove(&name);
                self.defaults.remove(&name);
            }
            Err(_) => self.sink.report(&WriteError::InvalidHeader {
                name: key.to_string(),
            }),
        }
        self
    }

    pub(crate) fn write_response(mut self, status: StatusCode, payload: Payload) {
        self.write_headers();
        self.sink.write_status(status);

        tracing::debug!(status = status.as_u16(), "response status written");

        let body = match payload {
            Payload::Empty => return,
            Payload::Fault(message)
            | Payload::Text(message)
            | Payload::Classified { message, .. } => {
                serde_json::to_vec(&Envelope::new(status, message))
            }
            Payload::Envelope(envelope) => serde_json::to_vec(&envelope),
            Payload::Raw(value) => serde_json::to_vec(&value),
            Payload::Unencodable(e) => Err(e),
        };

        let result = body
            .map_err(WriteError::from)
            .and_then(|mut bytes| {
                bytes.push(b'\n');
                self.sink.write_body(&bytes).map_err(WriteError::from)
            });

        if let Err(e) = result {
            self.sink.report(&e);
        }
    }

    fn write_headers(&mut self) {
        let headers = self.sink.headers_mut();
        for (name, value) in &self.defaults {
            headers.insert(name.clone(), value.clone());
        }
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), WriteError> {
    let invalid = || WriteError::InvalidHeader {
        name: name.to_string(),
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
    let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
    Ok((header_name, header_value))
}
