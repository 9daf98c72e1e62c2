//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries and demos
//! - Let `RUST_LOG` override the built-in filter
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever owns `main`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or invalid.
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        init_logging("json_response=debug");
        assert!(!init_logging("json_response=debug"));
    }
}
