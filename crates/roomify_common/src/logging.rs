//! Logging utilities for the Roomify application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the workspace. Diagnostic output goes to the console only; no error is
//! persisted to any durable store.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// This function should be called once at the start of the application.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still takes precedence over the directive derived from `level`.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("roomify={}", level).parse().expect("valid directive"));

    // Use try_init to handle the case where a global default subscriber has
    // already been set (tests, embedded use).
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
