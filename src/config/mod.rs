//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, apply defaults, validate)
//!     → AppConfig (validated, immutable)
//!     → passed by value/reference to logger, HTTP app, lifecycle
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once at process start; no reload, no ambient reads
//! - Optional variables have documented defaults; required ones fail startup
//! - No global singleton: the entry point owns the value and hands it out

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::{AppConfig, CorsConfig, TwitchConfig};
