//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with an environment filter.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
