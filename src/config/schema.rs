//! Configuration schema definitions.
//!
//! The whole configuration is resolved once at process start and never
//! mutated afterwards; collaborators receive it by reference or clone.

/// Root configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the listener binds to.
    pub port: u16,

    /// Environment name (e.g. "development", "production", "test").
    pub environment: String,

    /// CORS settings.
    pub cors: CorsConfig,

    /// Twitch integration settings.
    pub twitch: TwitchConfig,
}

impl AppConfig {
    /// True when running in the development environment.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// True when running under a test harness.
    ///
    /// The composition root uses this to skip binding a real listener.
    /// Unknown environment names behave like production.
    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }
}

/// CORS configuration.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the service. Never empty: falls back to
    /// the built-in default list when the source variable is absent or empty.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
                "null".to_string(),
            ],
        }
    }
}

/// Twitch integration configuration.
#[derive(Debug, Clone)]
pub struct TwitchConfig {
    /// Twitch application client id. Required; startup fails without it.
    pub client_id: String,

    /// OAuth token issuer.
    pub issuer: String,
}

/// Default TCP port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment name when `NODE_ENV` is not set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default OAuth issuer when `TWITCH_ISSUER` is not set.
pub const DEFAULT_TWITCH_ISSUER: &str = "https://id.twitch.tv/oauth2";
