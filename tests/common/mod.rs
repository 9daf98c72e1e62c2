//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io;

use axum::http::{HeaderMap, StatusCode};
use json_response::{Recorder, ResponseSink, WriteError};
use serde_json::Value;

/// Parse a recorded body as JSON.
pub fn body_json(rec: &Recorder) -> Value {
    serde_json::from_slice(rec.body()).expect("body is not JSON")
}

/// Assert status, JSON body, and the default content type in one go.
pub fn assert_json(rec: &Recorder, status: u16, expected: Value) {
    assert_eq!(rec.status().as_u16(), status);
    assert_eq!(body_json(rec), expected);
    assert_eq!(rec.header("content-type"), Some("application/json"));
}

/// Sink whose body writes always fail; reports are kept for inspection.
#[derive(Default)]
pub struct BrokenSink {
    pub headers: HeaderMap,
    pub status: Option<StatusCode>,
    pub reports: Vec<String>,
}

impl ResponseSink for BrokenSink {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn write_body(&mut self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
    }

    fn report(&mut self, error: &WriteError) {
        self.reports.push(error.to_string());
    }
}
