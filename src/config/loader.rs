//! Configuration loading from the process environment.
//!
//! # Responsibilities
//! - Read environment variables once at startup
//! - Apply documented defaults for optional variables
//! - Fail fast on missing required variables or malformed values
//!
//! # Design Decisions
//! - Loading is a pure function of a variable lookup, so tests can drive it
//!   without mutating process-global state
//! - An empty variable is treated the same as an unset one

use std::env;

use crate::config::schema::{
    AppConfig, CorsConfig, TwitchConfig, DEFAULT_ENVIRONMENT, DEFAULT_PORT, DEFAULT_TWITCH_ISSUER,
};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is set but does not parse as a nonzero port number.
    #[error("Invalid value for {var}: {value:?} is not a valid port")]
    InvalidPort { var: &'static str, value: String },
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load(|var| env::var(var).ok())
}

/// Load configuration from an arbitrary variable lookup.
pub fn load<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // An empty value is treated as "not set" for every variable.
    let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let port = match var("PORT") {
        Some(raw) => parse_port(&raw).ok_or(ConfigError::InvalidPort {
            var: "PORT",
            value: raw,
        })?,
        None => DEFAULT_PORT,
    };

    let environment = var("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

    let client_id = var("TWITCH_CLIENT_ID").ok_or(ConfigError::MissingVar("TWITCH_CLIENT_ID"))?;

    let issuer = var("TWITCH_ISSUER").unwrap_or_else(|| DEFAULT_TWITCH_ISSUER.to_string());

    let cors = match var("ALLOWED_ORIGINS") {
        Some(raw) => CorsConfig {
            allowed_origins: raw.split(',').map(str::to_string).collect(),
        },
        None => CorsConfig::default(),
    };

    Ok(AppConfig {
        port,
        environment,
        cors,
        twitch: TwitchConfig { client_id, issuer },
    })
}

/// Parse a port value, rejecting zero (the listener needs a concrete port).
fn parse_port(raw: &str) -> Option<u16> {
    raw.parse::<u16>().ok().filter(|p| *p != 0)
}
