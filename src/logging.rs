//! Logging init: stderr subscriber with env-filter override.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Honors `RUST_LOG` when set; defaults to `info` globally and `debug` for
/// this crate. Call once from the host or CLI before anything else.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sortsync=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
