//! Configuration validation.
//!
//! Semantic checks run after deserialization and environment overrides.
//! All problems are reported at once rather than stopping at the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::Settings;

/// A single semantic problem in the settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("api_key must not be empty")]
    EmptyApiKey,

    #[error("prosody_url '{url}' is not a valid URL: {reason}")]
    InvalidProsodyUrl { url: String, reason: String },

    #[error("prosody_url scheme must be http or https (got '{0}')")]
    UnsupportedScheme(String),

    #[error("bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate settings, returning every error found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.api_key.is_empty() {
        errors.push(ValidationError::EmptyApiKey);
    }

    match Url::parse(&settings.prosody_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidProsodyUrl {
            url: settings.prosody_url.clone(),
            reason: e.to_string(),
        }),
    }

    if settings.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(settings.bind_address.clone()));
    }

    if settings.health_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("health_timeout_secs"));
    }
    if settings.lookup_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("lookup_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
