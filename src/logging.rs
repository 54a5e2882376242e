//! Logging setup
//!
//! Logs always go to stderr: stdout carries the status-bar JSON line (or
//! `sinkctl` output) and must not be interleaved with log records.
//! `RUST_LOG`, when set, takes precedence over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "sinkbar=info",
        2 => "sinkbar=debug",
        _ => "sinkbar=trace",
    }
}

/// Initialize the global `tracing` subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
