//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → log → Listening → serve
//!
//! Shutdown (shutdown.rs):
//!     First trigger wins → stop accepting → bounded drain → exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown (repeats ignored)
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal: a process that looks alive but serves nothing is
//!   worse than one that exits loudly
//! - The shutdown sequence runs exactly once, however many signals arrive
//! - Draining is bounded by a grace period so close can never hang forever

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{LifecycleState, Server, ServerError};
