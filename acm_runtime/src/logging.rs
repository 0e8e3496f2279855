//! Tracing setup for the `acm` binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber at `level` for both crates.
/// `RUST_LOG`, when set, takes precedence.
pub fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("acm_runtime={level},acm_engine={level}")));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
