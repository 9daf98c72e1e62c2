//! JSON response writing.
//!
//! # Data Flow
//! ```text
//! handler
//!     → success.rs / failure.rs (outcome method picks the status)
//!     → payload.rs (input normalized into a Payload)
//!     → response.rs (headers, status, envelope or pass-through body)
//!     → sink.rs (framework-provided target, or Recorder)
//! ```

pub mod failure;
pub mod payload;
pub mod response;
pub mod sink;
pub mod success;

pub use payload::{Envelope, Payload, StatusMessage};
pub use response::{ResponseWriter, APPLICATION_JSON};
pub use sink::{Recorder, ResponseSink};
