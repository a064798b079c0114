//! Twitch backend service library.
//!
//! A minimal HTTP service: environment-driven configuration, one health-check
//! endpoint, and signal-based graceful shutdown.

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::build_app;
pub use lifecycle::{Server, Shutdown};
