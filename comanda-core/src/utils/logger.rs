//! Logging Infrastructure
//!
//! Structured logging setup for the desktop shell. The core only emits
//! `tracing` events; the shell decides where they go.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at the default `info` level
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger with an explicit default level filter
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logger_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
