//! Output sinks the writer can target.
//!
//! # Responsibilities
//! - Define the boundary the hosting framework implements
//! - Provide an in-memory recorder that converts into an axum response
//!
//! # Design Decisions
//! - Write failures go to `report`, never back to the caller
//! - The recorder does not guard against double writes, it counts them

use std::io;

use axum::{
    body::Body,
    http::{HeaderMap, Response, StatusCode},
    response::IntoResponse,
};

use crate::error::WriteError;

/// Target for headers, a status code, and body bytes.
pub trait ResponseSink {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Called with failures that happen after the status is committed.
    fn report(&mut self, error: &WriteError) {
        tracing::warn!(error = %error, "response body discarded");
    }
}

/// In-memory sink.
///
/// Status defaults to 200 when never written, matching what a server does
/// for a handler that only writes a body.
#[derive(Debug, Default)]
pub struct Recorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
    status_writes: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Lossy UTF-8 view of the body.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// First value of `name`, if it is present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn status_writes(&self) -> usize {
        self.status_writes
    }
}

impl ResponseSink for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status_writes += 1;
        self.status = Some(status);
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.body.extend_from_slice(bytes);
        Ok(())
    }
}

impl IntoResponse for Recorder {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseSink for Response<Vec<u8>> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        Response::headers_mut(self)
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.body_mut().extend_from_slice(bytes);
        Ok(())
    }
}
