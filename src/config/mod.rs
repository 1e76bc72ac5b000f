//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Environment variables
//!
//! | Variable                      | Setting               |
//! |-------------------------------|-----------------------|
//! | `API_KEY`                     | `api_key`             |
//! | `PROSODY_URL`                 | `prosody_url`         |
//! | `MUC_DOMAIN`                  | `muc_domain`          |
//! | `MUC_DOMAIN_ALT`              | `muc_domain_alt` (empty = none) |
//! | `APP_TITLE`                   | `app_title`           |
//! | `APP_VERSION`                 | `app_version`         |
//! | `DEBUG`                       | `debug`               |
//! | `BIND_ADDRESS`                | `bind_address`        |
//! | `PROSODY_HEALTH_TIMEOUT_SECS` | `health_timeout_secs` |
//! | `PROSODY_LOOKUP_TIMEOUT_SECS` | `lookup_timeout_secs` |
//!
//! Names are unprefixed, matching how the container maps them.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, load_settings_with, ConfigError};
pub use schema::{Settings, DEFAULT_API_KEY};
pub use validation::{validate_settings, ValidationError};
