//! Success-family outcomes.

use axum::http::StatusCode;

use crate::http::payload::Payload;
use crate::http::response::ResponseWriter;
use crate::http::sink::ResponseSink;

impl<S: ResponseSink + ?Sized> ResponseWriter<'_, S> {
    /// 200 OK.
    pub fn success(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::OK, payload.into());
    }

    /// 200 OK, same as [`success`](Self::success).
    pub fn ok(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::OK, payload.into());
    }

    pub fn created(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::CREATED, payload.into());
    }

    pub fn accepted(self, payload: impl Into<Payload>) {
        self.write_response(StatusCode::ACCEPTED, payload.into());
    }

    /// 204 with headers only.
    pub fn no_content(self) {
        self.write_response(StatusCode::NO_CONTENT, Payload::Empty);
    }
}
