//! Tracing subscriber initialization for binaries and integration tests.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Honors `RUST_LOG`; defaults to `info`.
/// Safe to call more than once, later calls are no-ops.
pub fn init(json_output: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = if json_output {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
