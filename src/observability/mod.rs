//! Observability.
//!
//! The writer logs through `tracing`:
//! - `debug` when a status is committed
//! - `warn` from [`ResponseSink::report`](crate::http::ResponseSink::report)
//!   when a body is discarded or a header is skipped

pub mod logging;

pub use logging::init_logging;
