//! Structured logging with `tracing`.
//!
//! - [`init_subscriber`] installs the global stderr subscriber
//! - [`capture_logs`] records events in memory for assertions in tests
//!
//! Library code only emits events; binaries that embed the payload crates
//! decide whether and where to print them.

pub mod test_utils;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};

/// Initialize the global tracing subscriber with stderr output.
///
/// `RUST_LOG` takes precedence over `level` when set. Subsequent calls are
/// no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level to display, e.g. `"warn"`.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails if a global subscriber is already set
    let _ = subscriber.try_init();
}
