//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (owned by lifecycle)
//!     → server.rs (Axum Router: /health handler, 404 fallback)
//!     → middleware (trace, CORS)
//!     → response to client
//! ```

pub mod server;

pub use server::{build_app, AppState, HealthResponse};
