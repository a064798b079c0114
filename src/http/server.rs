//! HTTP application setup.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, CORS)
//! - Serve the health status payload
//!
//! # Design Decisions
//! - The Router is pure construction: no socket, no I/O, so tests can drive
//!   it directly with simulated requests
//! - Unmatched paths fall through to Axum's default 404 handler
//! - No identifying response header is emitted (Axum adds none by default)

use axum::{extract::State, http::HeaderValue, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Environment name echoed in the health payload.
    pub environment: String,
}

/// Health status payload returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`: if the handler runs, the process is alive.
    pub status: &'static str,

    /// Time the response was built, RFC 3339 UTC with millisecond precision.
    pub timestamp: String,

    /// Environment the service was started in.
    pub environment: String,
}

/// Build the Axum application for the given configuration.
pub fn build_app(config: &AppConfig) -> Router {
    let state = AppState {
        environment: config.environment.clone(),
    };

    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors_layer(&config.cors.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Health check handler.
///
/// Performs no fallible work: the payload is constructed fresh per request.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.environment,
    })
}

/// Build the CORS layer from the configured origin list.
///
/// Origins that do not form a valid header value are logged and skipped;
/// a malformed entry must not take the service down.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    // AllowOrigin::list panics on a wildcard entry.
    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new().allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}
