//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every configured header name and value is valid HTTP
//! - Check the bind address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::{ServerConfig, WriterConfig};

/// A single semantic problem in a loaded config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid header name {0:?}")]
    HeaderName(String),

    #[error("invalid value for header {0:?}")]
    HeaderValue(String),

    #[error("content_type must not be empty")]
    EmptyContentType,

    #[error("invalid bind address {0:?}")]
    BindAddress(String),
}

pub fn validate_writer(config: &WriterConfig, errors: &mut Vec<ValidationError>) {
    if config.content_type.trim().is_empty() {
        errors.push(ValidationError::EmptyContentType);
    } else if HeaderValue::from_str(&config.content_type).is_err() {
        errors.push(ValidationError::HeaderValue("Content-Type".to_string()));
    }

    for (name, value) in &config.default_headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::HeaderName(name.clone()));
        } else if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::HeaderValue(name.clone()));
        }
    }
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.bind_address.clone()));
    }
    validate_writer(&config.writer, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
