//! Tracing setup.
//!
//! Logs go to stderr so stdout stays clean for command output.
//! `MINECARBON_LOG` takes a filter directive and wins over the config.

use std::io;

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "MINECARBON_LOG";

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init(default_level: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
}
