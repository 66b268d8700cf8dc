//! Process-wide tracing subscriber.
//!
//! Events are written as JSON lines to stdout. `RUST_LOG` selects the
//! levels; when it is unset or unparsable, INFO and above are kept so the
//! lifecycle lines and the players call records are always visible.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter honouring `RUST_LOG`, defaulting to INFO.
pub fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Install the JSON subscriber as the global default.
///
/// # Errors
/// Fails when a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt().with_env_filter(log_filter()).json().try_init()
}
