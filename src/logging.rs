//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set. Stdout carries the session
/// transcript, so only problems are logged unless asked otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a compact stderr subscriber. Call once from `main`.
pub fn setup_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
