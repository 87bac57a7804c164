//! Diagnostic logging for the `lodestar` binary.
//!
//! The engine and harness only emit `tracing` events; this module installs
//! the subscriber. Output goes to stderr so that reports on stdout stay
//! machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` applies
/// (`"warn"` normally, `"debug"` under `--verbose`).
///
/// # Example
/// ```bash
/// RUST_LOG=lodestar_search=trace lodestar romania --from Arad --algorithm rbfs
/// ```
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
