//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide tracing subscriber
//! - Pick the default log level from the environment name
//!
//! # Design Decisions
//! - Verbose (debug) default in development, info everywhere else
//! - `RUST_LOG` always wins over the environment-derived default
//! - JSON output outside development for machine parsing

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Call once at process start, before any other component logs.
pub fn init(environment: &str) {
    let default_directive = if environment == "development" {
        "twitch_backend=debug,tower_http=debug"
    } else {
        "twitch_backend=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(filter);

    if environment == "development" {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}
