//! Logging setup

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber, writing lines to `writer`.
///
/// `RUST_LOG` overrides the default `info` filter where the host has an environment.
/// Timestamps are left out because wasm32 has no system clock. Returns false when a
/// global subscriber was already installed.
pub fn init_logging<W>(writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(writer)
        .try_init()
        .is_ok()
}
