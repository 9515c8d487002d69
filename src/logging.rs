//! Tracing subscriber setup for the demo binary.
//!
//! The library only emits events; installing a subscriber is the
//! binary's job.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to stderr.
///
/// `RUST_LOG` takes precedence; `default_filter` (from config) applies
/// when the env var is unset.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
