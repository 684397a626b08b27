//! Diagnostic tracing for the checker shell.
//!
//! Only the shell logs. The evaluator in [`crate::core`] stays silent so the
//! verdict path has no side effects.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format, so stdout carries only the verdict.
///
/// # Example
/// ```bash
/// RUST_LOG=ftcheck=debug ftcheck check --status status.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
