//! Subscriber installation and span definitions.

pub mod spans;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact terminal subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Returns `false` if a
/// global subscriber was already installed, which is not an error: hosts
/// that configure tracing themselves simply keep theirs.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().compact())
        .try_init()
        .is_ok()
}

/// Same as [`init_tracing`] but emits newline-delimited JSON.
pub fn init_tracing_json(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().json())
        .try_init()
        .is_ok()
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
