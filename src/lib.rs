//! Uniform JSON responses for HTTP handlers.
//!
//! A [`ResponseWriter`] wraps a [`ResponseSink`] and maps a semantic outcome
//! (ok, created, not found, ...) to a status code and a JSON body. Text and
//! error payloads become a `{"code": .., "message": ..}` envelope; structured
//! payloads are written as-is.
//!
//! ```
//! use json_response::{Recorder, ResponseWriter};
//!
//! let mut rec = Recorder::new();
//! ResponseWriter::new(&mut rec).too_many_requests("slow down");
//! assert_eq!(rec.status().as_u16(), 429);
//! assert_eq!(rec.body_text().trim_end(), r#"{"code":429,"message":"slow down"}"#);
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod server;

pub use config::WriterConfig;
pub use error::WriteError;
pub use http::{Envelope, Payload, Recorder, ResponseSink, ResponseWriter, StatusMessage};
