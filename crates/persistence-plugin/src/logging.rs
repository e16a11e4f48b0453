//! Structured logging setup.

use persistence_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG`, or by the
/// configured level when `RUST_LOG` is unset or invalid.
///
/// Returns `false` if the host already installed a global subscriber; the
/// plugin then logs through the host's subscriber instead.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
