//! Observability subsystem.
//!
//! Logging is the only sink: structured tracing events to stdout, with the
//! format and default level chosen by the environment at startup.

pub mod logging;
