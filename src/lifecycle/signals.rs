//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate signals to shutdown-coordinator triggers
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Repeat signals during draining are ignored; the coordinator latch
//!   guarantees the shutdown sequence runs once

use std::sync::Arc;

use crate::lifecycle::shutdown::Shutdown;

/// Wait for SIGTERM or SIGINT. Returns the signal name that was received.
///
/// # Panics
/// Panics if signal handlers cannot be registered (OS resource exhaustion).
#[cfg(unix)]
pub async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    }
}

/// Wait for Ctrl+C (non-Unix platforms).
///
/// # Panics
/// Panics if the Ctrl+C handler cannot be registered.
#[cfg(not(unix))]
pub async fn wait_for_signal() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to register Ctrl+C handler");
    "CTRL_C"
}

/// Run the signal listener, routing termination signals into `shutdown`.
///
/// Keeps listening after the first signal so repeat deliveries are absorbed
/// instead of falling back to the OS default (which would kill the process
/// mid-drain).
pub async fn listen(shutdown: Arc<Shutdown>) {
    loop {
        let signal = wait_for_signal().await;
        if shutdown.trigger() {
            tracing::info!(signal = signal, "Shutdown initiated");
        } else {
            tracing::debug!(signal = signal, "Shutdown already in progress");
        }
    }
}
