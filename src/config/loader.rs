//! Settings loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::Settings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for environment variable {var}")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load settings from the real process environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with(path, |var| std::env::var(var).ok())
}

/// Load settings with an explicit environment lookup.
///
/// Layering, lowest precedence first: defaults, TOML file, environment.
/// The result is validated before it is returned.
pub fn load_settings_with<F>(path: Option<&Path>, env: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => Settings::default(),
    };

    apply_env(&mut settings, &env)?;
    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}

fn apply_env<F>(settings: &mut Settings, env: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = env("API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = env("PROSODY_URL") {
        settings.prosody_url = v;
    }
    if let Some(v) = env("MUC_DOMAIN") {
        settings.muc_domain = v;
    }
    if let Some(v) = env("MUC_DOMAIN_ALT") {
        settings.muc_domain_alt = if v.trim().is_empty() { None } else { Some(v) };
    }
    if let Some(v) = env("APP_TITLE") {
        settings.app_title = v;
    }
    if let Some(v) = env("APP_VERSION") {
        settings.app_version = v;
    }
    if let Some(v) = env("DEBUG") {
        settings.debug = parse_bool("DEBUG", v)?;
    }
    if let Some(v) = env("BIND_ADDRESS") {
        settings.bind_address = v;
    }
    if let Some(v) = env("PROSODY_HEALTH_TIMEOUT_SECS") {
        settings.health_timeout_secs = parse_secs("PROSODY_HEALTH_TIMEOUT_SECS", v)?;
    }
    if let Some(v) = env("PROSODY_LOOKUP_TIMEOUT_SECS") {
        settings.lookup_timeout_secs = parse_secs("PROSODY_LOOKUP_TIMEOUT_SECS", v)?;
    }
    Ok(())
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env { var, value }),
    }
}

fn parse_secs(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse() {
        Ok(secs) => Ok(secs),
        Err(_) => Err(ConfigError::Env { var, value }),
    }
}
