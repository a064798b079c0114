//! Startup orchestration and the server lifecycle state machine.
//!
//! # Responsibilities
//! - Bind the listener and begin accepting traffic
//! - Install signal handlers once the server is live
//! - Drive the ordered shutdown sequence
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal, never a background failure
//! - Shutdown is bounded: a drain that outlives the grace period does not
//!   prevent process termination
//! - Whether to bind at all is the caller's decision; this component has no
//!   knowledge of environment names

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;

/// How long in-flight connections may outlive the shutdown trigger.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Error type for server startup and serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind the listener (port in use, permission denied).
    #[error("Failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed while the server was live.
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Lifecycle states of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Application built, listener not bound.
    Created,
    /// Listener bound, accepting connections.
    Listening,
    /// Shutdown triggered; no longer accepting, in-flight work finishing.
    Draining,
    /// Serve loop finished; the process is about to exit.
    Terminated,
}

/// Owns the transition from "not listening" to "terminated".
///
/// The listener socket is created and closed here and nowhere else.
pub struct Server {
    app: Router,
    port: u16,
    environment: String,
    shutdown: Arc<Shutdown>,
    state_tx: watch::Sender<LifecycleState>,
}

impl Server {
    /// Create a server in the `Created` state. No I/O happens here.
    pub fn new(app: Router, config: &AppConfig) -> Self {
        let (state_tx, _) = watch::channel(LifecycleState::Created);
        Self {
            app,
            port: config.port,
            environment: config.environment.clone(),
            shutdown: Arc::new(Shutdown::new()),
            state_tx,
        }
    }

    /// Handle for triggering shutdown without an OS signal.
    pub fn shutdown_handle(&self) -> Arc<Shutdown> {
        self.shutdown.clone()
    }

    /// Watch the lifecycle state transitions.
    pub fn state_watch(&self) -> watch::Receiver<LifecycleState> {
        self.state_tx.subscribe()
    }

    /// Bind the listener and serve until shutdown completes.
    ///
    /// On return the process should exit: `Ok(())` after a graceful shutdown
    /// (exit code 0), `Err` on a fatal startup failure.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                port: self.port,
                source,
            })?;

        tracing::info!(
            port = self.port,
            environment = %self.environment,
            "Server started"
        );
        let _ = self.state_tx.send(LifecycleState::Listening);

        // Subscribe before the signal listener starts so no trigger is missed.
        let mut graceful_rx = self.shutdown.subscribe();
        let mut deadline_rx = self.shutdown.subscribe();

        tokio::spawn(signals::listen(self.shutdown.clone()));

        let shutdown = self.shutdown.clone();
        let state_tx = self.state_tx.clone();
        let graceful = async move {
            if !shutdown.is_triggered() {
                let _ = graceful_rx.recv().await;
            }
            let _ = state_tx.send(LifecycleState::Draining);
        };

        let shutdown = self.shutdown.clone();
        let drain_deadline = async move {
            if !shutdown.is_triggered() {
                let _ = deadline_rx.recv().await;
            }
            tokio::time::sleep(SHUTDOWN_GRACE).await;
        };

        let server = axum::serve(listener, self.app)
            .with_graceful_shutdown(graceful)
            .into_future();

        tokio::select! {
            result = server => {
                if let Err(e) = result {
                    // Once draining, an I/O error must not block termination.
                    if self.shutdown.is_triggered() {
                        tracing::error!(error = %e, "Error while closing listener");
                    } else {
                        return Err(ServerError::Serve(e));
                    }
                }
            }
            _ = drain_deadline => {
                tracing::warn!(
                    grace_secs = SHUTDOWN_GRACE.as_secs(),
                    "Drain grace period exceeded; exiting anyway"
                );
            }
        }

        let _ = self.state_tx.send(LifecycleState::Terminated);
        tracing::info!("Server closed");
        Ok(())
    }
}
