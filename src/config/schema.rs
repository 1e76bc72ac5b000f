//! Configuration schema definitions.
//!
//! Every field has a default so that an empty config file (or no file at all)
//! yields a runnable relay. Environment overrides are applied on top by
//! `loader.rs`.

use serde::{Deserialize, Serialize};

/// API key shipped as the default. Startup warns when it is still in use.
pub const DEFAULT_API_KEY: &str = "change-me-in-production";

/// Root settings for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Expected value of the `X-API-Key` header.
    pub api_key: String,

    /// Base URL of the Prosody HTTP interface (e.g., "http://prosody:5280").
    pub prosody_url: String,

    /// Primary MUC domain.
    pub muc_domain: String,

    /// Alternative MUC domain (conference alias).
    pub muc_domain_alt: Option<String>,

    /// Service name reported by `/`, `/health` and `/docs`.
    pub app_title: String,

    /// Service version reported by `/`, `/health` and `/docs`.
    pub app_version: String,

    /// Raises the default log level to debug.
    pub debug: bool,

    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Budget for the Prosody health probe in seconds.
    pub health_timeout_secs: u64,

    /// Budget for a room participants lookup in seconds.
    pub lookup_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            prosody_url: "http://prosody:5280".to_string(),
            muc_domain: "muc.meet.yourdomain.com".to_string(),
            muc_domain_alt: Some("conference.meet.yourdomain.com".to_string()),
            app_title: "Prosody Participant Count Hook".to_string(),
            app_version: "1.0.0".to_string(),
            debug: false,
            bind_address: "0.0.0.0:8000".to_string(),
            health_timeout_secs: 5,
            lookup_timeout_secs: 10,
        }
    }
}

impl Settings {
    /// True while the shipped placeholder key is configured.
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}
