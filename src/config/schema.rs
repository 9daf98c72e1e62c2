//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::APPLICATION_JSON;

/// Defaults applied by every [`ResponseWriter`](crate::http::ResponseWriter)
/// built from this config.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct WriterConfig {
    /// Value of the `Content-Type` header.
    pub content_type: String,

    /// Extra headers set on every response (e.g. `Cache-Control`).
    pub default_headers: BTreeMap<String, String>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            content_type: APPLICATION_JSON.to_string(),
            default_headers: BTreeMap::new(),
        }
    }
}

/// Root configuration for the demo server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Response writer defaults.
    pub writer: WriterConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            writer: WriterConfig::default(),
        }
    }
}
